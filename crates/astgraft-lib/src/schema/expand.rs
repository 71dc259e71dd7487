//! Meta-type expansion.

use astgraft_core::MetaName;
use indexmap::IndexSet;

use super::Schema;

impl Schema {
    /// Expand a name to concrete node-type names.
    ///
    /// - `Node` → every node type, in definition order
    /// - `Statement` / `Expression` → the validated group members
    /// - a defined node-type name → itself
    /// - anything else → `None`
    ///
    /// Expansion is by name and never recurses, so self-referential node
    /// types cost nothing; cycles in the reference graph terminate trivially.
    pub(crate) fn expand_name(&self, name: &str) -> Option<IndexSet<String>> {
        match MetaName::from_name(name) {
            Some(MetaName::Node) => Some(
                self.definition
                    .nodes
                    .keys()
                    .filter(|key| MetaName::from_name(key).is_none())
                    .cloned()
                    .collect(),
            ),
            Some(MetaName::Statement) => Some(self.statement_kinds.clone()),
            Some(MetaName::Expression) => Some(self.expression_kinds.clone()),
            None => self
                .definition
                .contains(name)
                .then(|| std::iter::once(name.to_string()).collect()),
        }
    }

    /// If `types` is exactly one of the groups, return its meta type.
    ///
    /// The bound groups are checked before `Node`, so a definition where
    /// every node type happens to be a statement still collapses that set
    /// to `Statement`.
    pub(crate) fn group_alias(&self, types: &IndexSet<String>) -> Option<MetaName> {
        if types.is_empty() {
            return None;
        }
        if set_matches(types, &self.statement_kinds) {
            return Some(MetaName::Statement);
        }
        if set_matches(types, &self.expression_kinds) {
            return Some(MetaName::Expression);
        }
        if types.len() == self.nodes.len() && types.iter().all(|t| self.nodes.contains_key(t)) {
            return Some(MetaName::Node);
        }
        None
    }
}

/// Set equality, ignoring order.
fn set_matches(types: &IndexSet<String>, group: &IndexSet<String>) -> bool {
    types.len() == group.len() && types.iter().all(|t| group.contains(t))
}
