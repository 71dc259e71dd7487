//! Parent inference.
//!
//! One scan over the resolved nodes inverts the reference graph: node `Q`
//! is a possible parent of `T` when any property of `Q` can hold a `T`,
//! directly or as a sequence element. Unresolved markers contribute
//! nothing. Nothing referencing `T` leaves it with [`Parents::None`],
//! which is distinct from `T` being unknown.

use indexmap::{IndexMap, IndexSet};

use super::{Parents, ResolvedProperty, Schema};

impl Schema {
    pub(super) fn infer_parents(&mut self) {
        let mut referrers: IndexMap<String, IndexSet<String>> = self
            .nodes
            .keys()
            .map(|name| (name.clone(), IndexSet::new()))
            .collect();

        for (name, node) in &self.nodes {
            let mut targets = IndexSet::new();
            for property in node.properties.values() {
                collect_targets(property, &mut targets);
            }
            for target in targets {
                if let Some(parents) = referrers.get_mut(&target) {
                    parents.insert(name.clone());
                }
            }
        }

        for (name, parents) in referrers {
            if let Some(node) = self.nodes.get_mut(&name) {
                node.parents = if parents.is_empty() {
                    Parents::None
                } else {
                    Parents::Nodes(parents)
                };
            }
        }
    }
}

fn collect_targets(property: &ResolvedProperty, out: &mut IndexSet<String>) {
    match property {
        ResolvedProperty::Value(_) => {}
        ResolvedProperty::Node(set) | ResolvedProperty::NodeList(set) => {
            out.extend(set.types.iter().cloned());
        }
        ResolvedProperty::Union(members) => {
            for member in members {
                collect_targets(member, out);
            }
        }
    }
}
