//! Layer merging.
//!
//! Enhancement layers fold onto a base definition left to right. Group
//! bindings take the set union. Colliding properties become unions, except
//! two cases that merge by content instead:
//!
//! - `RefList` + `RefList`: one sequence with the unioned element names. An
//!   enhancement widening what a list may hold must widen the elements, never
//!   produce a union of two sequence types.
//! - `StrEnum` + `StrEnum`: one enum with the unioned values.

use indexmap::map::Entry;

use super::types::{Definition, NodeShape, Property, ValueType};

impl Definition {
    /// Apply enhancement layers in order, returning the merged definition.
    pub fn extend(mut self, layers: impl IntoIterator<Item = Definition>) -> Definition {
        for layer in layers {
            self.apply_layer(layer);
        }
        self
    }

    fn apply_layer(&mut self, layer: Definition) {
        extend_unique(&mut self.statement_kinds, layer.statement_kinds);
        extend_unique(&mut self.expression_kinds, layer.expression_kinds);

        for (name, shape) in layer.nodes {
            match self.nodes.entry(name) {
                Entry::Occupied(mut entry) => entry.get_mut().merge_from(shape),
                Entry::Vacant(entry) => {
                    entry.insert(shape);
                }
            }
        }
    }
}

impl NodeShape {
    fn merge_from(&mut self, layer: NodeShape) {
        for (name, property) in layer.properties {
            match self.properties.entry(name) {
                Entry::Occupied(mut entry) => {
                    let merged = merge_property(entry.get().clone(), property);
                    entry.insert(merged);
                }
                Entry::Vacant(entry) => {
                    entry.insert(property);
                }
            }
        }
    }
}

/// Merge two shapes declared for the same property.
fn merge_property(base: Property, layer: Property) -> Property {
    if base == layer {
        return base;
    }
    match (base, layer) {
        (Property::RefList(base_names), Property::RefList(layer_names)) => {
            let mut names = base_names;
            extend_unique(&mut names, layer_names);
            Property::RefList(names)
        }
        (
            Property::Value(ValueType::StrEnum(base_values)),
            Property::Value(ValueType::StrEnum(layer_values)),
        ) => {
            let mut values = base_values;
            extend_unique(&mut values, layer_values);
            Property::Value(ValueType::StrEnum(values))
        }
        (base, layer) => normalize_union(vec![base, layer]),
    }
}

/// Flatten, deduplicate, and collapse union members.
///
/// Nested unions flatten into the parent. All `RefList` members fold into
/// one, as do all `StrEnum` members. A single surviving member is returned
/// bare. Input must be non-empty.
pub(crate) fn normalize_union(members: Vec<Property>) -> Property {
    let mut flat = Vec::with_capacity(members.len());
    flatten_into(members, &mut flat);

    let mut out: Vec<Property> = Vec::new();
    let mut list_slot: Option<usize> = None;
    let mut enum_slot: Option<usize> = None;

    for member in flat {
        match member {
            Property::RefList(names) => match list_slot {
                Some(index) => {
                    if let Property::RefList(existing) = &mut out[index] {
                        extend_unique(existing, names);
                    }
                }
                None => {
                    list_slot = Some(out.len());
                    out.push(Property::RefList(names));
                }
            },
            Property::Value(ValueType::StrEnum(values)) => match enum_slot {
                Some(index) => {
                    if let Property::Value(ValueType::StrEnum(existing)) = &mut out[index] {
                        extend_unique(existing, values);
                    }
                }
                None => {
                    enum_slot = Some(out.len());
                    out.push(Property::Value(ValueType::StrEnum(values)));
                }
            },
            other => {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
    }

    if out.len() == 1 {
        return out.remove(0);
    }
    Property::Union(out)
}

fn flatten_into(members: Vec<Property>, out: &mut Vec<Property>) {
    for member in members {
        match member {
            Property::Union(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

fn extend_unique(base: &mut Vec<String>, layer: Vec<String>) {
    for name in layer {
        if !base.contains(&name) {
            base.push(name);
        }
    }
}
