//! Reference checking and node assembly.
//!
//! Two walks over the merged definition. The first checks every reference
//! target and reports unknowns (errors under [`Strictness::Strict`],
//! warnings under [`Strictness::Lenient`]). The second rewrites each
//! property reference-free: meta types expand to their groups, unknown
//! targets become explicit unresolved markers.

use astgraft_core::{MetaName, Property, RESERVED_PROPERTIES};
use indexmap::IndexMap;

use crate::diagnostics::{DiagnosticKind, SchemaPath};

use super::{NodeSet, Parents, ResolvedNode, ResolvedProperty, Schema, Strictness};

impl Schema {
    pub(super) fn check_references(&mut self) {
        let kind = match self.options.strictness {
            Strictness::Strict => DiagnosticKind::UnknownRefTarget,
            Strictness::Lenient => DiagnosticKind::UnresolvedPassthrough,
        };

        let mut offenders: Vec<(String, SchemaPath)> = Vec::new();
        for (node_name, shape) in self.definition.iter() {
            if MetaName::from_name(node_name).is_some() {
                // Already rejected as a reserved node name
                continue;
            }
            for (property_name, property) in &shape.properties {
                if RESERVED_PROPERTIES.contains(&property_name.as_str()) {
                    continue;
                }
                let path = SchemaPath::property(node_name, property_name);
                collect_unknown_targets(
                    property,
                    &path,
                    &|name: &str| self.knows_target(name),
                    &mut offenders,
                );
            }
        }

        for (name, path) in offenders {
            self.resolve_diagnostics
                .report(kind, path)
                .message(&name)
                .emit();
        }
    }

    fn knows_target(&self, name: &str) -> bool {
        MetaName::from_name(name).is_some() || self.definition.contains(name)
    }

    pub(super) fn build_nodes(&mut self) {
        let mut nodes = IndexMap::with_capacity(self.definition.len());
        for (node_name, shape) in self.definition.iter() {
            if MetaName::from_name(node_name).is_some() {
                continue;
            }
            let mut properties = IndexMap::with_capacity(shape.properties.len());
            for (property_name, property) in &shape.properties {
                if RESERVED_PROPERTIES.contains(&property_name.as_str()) {
                    continue;
                }
                properties.insert(property_name.clone(), self.resolve_property(property));
            }
            nodes.insert(
                node_name.to_string(),
                ResolvedNode {
                    name: node_name.to_string(),
                    properties,
                    parents: Parents::None,
                },
            );
        }
        self.nodes = nodes;
    }

    fn resolve_property(&self, property: &Property) -> ResolvedProperty {
        match property {
            Property::Value(value) => ResolvedProperty::Value(value.clone()),
            Property::Ref(name) => {
                ResolvedProperty::Node(self.resolve_targets(std::slice::from_ref(name)))
            }
            Property::RefList(names) => ResolvedProperty::NodeList(self.resolve_targets(names)),
            Property::Union(members) => ResolvedProperty::Union(
                members
                    .iter()
                    .map(|member| self.resolve_property(member))
                    .collect(),
            ),
        }
    }

    fn resolve_targets(&self, names: &[String]) -> NodeSet {
        let mut set = NodeSet::default();
        for name in names {
            match self.expand_name(name) {
                Some(types) => set.types.extend(types),
                None => set.unresolved.push(name.clone()),
            }
        }
        set
    }
}

fn collect_unknown_targets(
    property: &Property,
    path: &SchemaPath,
    known: &impl Fn(&str) -> bool,
    out: &mut Vec<(String, SchemaPath)>,
) {
    match property {
        Property::Value(_) => {}
        Property::Ref(name) => {
            if !known(name) {
                out.push((name.clone(), path.clone()));
            }
        }
        Property::RefList(names) => {
            for name in names {
                if !known(name) {
                    out.push((name.clone(), path.clone()));
                }
            }
        }
        Property::Union(members) => {
            for member in members {
                collect_unknown_targets(member, path, known, out);
            }
        }
    }
}
