//! Resolved-schema read-outs: JSON dump and per-node text printout.

use astgraft_core::{Colors, ValueType};
use serde_json::{Value, json};

use super::{NodeSet, Parents, ResolvedNode, ResolvedProperty, Schema};

impl Schema {
    /// The resolved schema as a JSON value.
    ///
    /// Properties are reference-free: single positions become `{"node": ...}`
    /// with the concrete type names, sequences `{"listOf": ...}`, unions
    /// `{"oneOf": ...}`. Unresolved markers surface under `"unknown"`.
    /// `parents` is `null` for root-only node types.
    pub fn to_json(&self) -> Value {
        json!({
            "nodes": self.nodes_map_json(self.iter()),
            "statementType": self.statement_kinds,
            "expressionType": self.expression_kinds,
        })
    }

    /// A JSON object for a subset of resolved nodes, keyed by name.
    pub fn nodes_to_json(&self, nodes: &[&ResolvedNode]) -> Value {
        Value::Object(self.nodes_map_json(nodes.iter().copied()))
    }

    fn nodes_map_json<'a>(
        &self,
        nodes: impl Iterator<Item = &'a ResolvedNode>,
    ) -> serde_json::Map<String, Value> {
        nodes
            .map(|node| (node.name.clone(), node_json(node)))
            .collect()
    }

    /// Human-readable printout of resolved nodes.
    pub fn render_nodes(&self, nodes: &[&ResolvedNode], colors: Colors) -> String {
        let mut out = String::new();
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}{}{}\n", colors.blue, node.name, colors.reset));
            for (name, property) in &node.properties {
                out.push_str(&format!(
                    "  {}{}:{} {}\n",
                    colors.dim,
                    name,
                    colors.reset,
                    self.render_property(property, colors)
                ));
            }
            let parents = match &node.parents {
                Parents::None => format!("{}none{}", colors.dim, colors.reset),
                Parents::Nodes(names) => self.render_name_union(names, colors),
            };
            out.push_str(&format!(
                "  {}parents:{} {}\n",
                colors.dim, colors.reset, parents
            ));
        }
        out
    }

    fn render_property(&self, property: &ResolvedProperty, colors: Colors) -> String {
        match property {
            ResolvedProperty::Value(value) => render_value(value, colors),
            ResolvedProperty::Node(set) => self.render_node_set(set, colors),
            ResolvedProperty::NodeList(set) => {
                let element = self.render_node_set(set, colors);
                if element.contains(" | ") {
                    format!("({element})[]")
                } else {
                    format!("{element}[]")
                }
            }
            ResolvedProperty::Union(members) => members
                .iter()
                .map(|member| self.render_property(member, colors))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    fn render_node_set(&self, set: &NodeSet, colors: Colors) -> String {
        if set.is_empty() {
            return format!("{}never{}", colors.dim, colors.reset);
        }
        let mut parts = Vec::with_capacity(set.len());
        if let Some(group) = self.group_alias(&set.types) {
            parts.push(format!("{}{}{}", colors.blue, group, colors.reset));
        } else {
            parts.extend(
                set.types
                    .iter()
                    .map(|name| format!("{}{}{}", colors.blue, name, colors.reset)),
            );
        }
        parts.extend(
            set.unresolved
                .iter()
                .map(|name| format!("{}unknown<{}>{}", colors.dim, name, colors.reset)),
        );
        parts.join(" | ")
    }

    fn render_name_union(&self, names: &indexmap::IndexSet<String>, colors: Colors) -> String {
        if let Some(group) = self.group_alias(names) {
            return format!("{}{}{}", colors.blue, group, colors.reset);
        }
        names
            .iter()
            .map(|name| format!("{}{}{}", colors.blue, name, colors.reset))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn node_json(node: &ResolvedNode) -> Value {
    let properties: serde_json::Map<String, Value> = node
        .properties
        .iter()
        .map(|(name, property)| (name.clone(), property_json(property)))
        .collect();

    let parents = match &node.parents {
        Parents::None => Value::Null,
        Parents::Nodes(names) => json!(names),
    };

    json!({
        "properties": properties,
        "parents": parents,
    })
}

fn property_json(property: &ResolvedProperty) -> Value {
    match property {
        ResolvedProperty::Value(value) => value_json(value),
        ResolvedProperty::Node(set) => set_json("node", set),
        ResolvedProperty::NodeList(set) => set_json("listOf", set),
        ResolvedProperty::Union(members) => json!({
            "oneOf": members.iter().map(property_json).collect::<Vec<_>>(),
        }),
    }
}

fn set_json(key: &str, set: &NodeSet) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), json!(set.types));
    if !set.unresolved.is_empty() {
        map.insert("unknown".to_string(), json!(set.unresolved));
    }
    Value::Object(map)
}

fn value_json(value: &ValueType) -> Value {
    match value {
        ValueType::String => json!("string"),
        ValueType::Number => json!("number"),
        ValueType::Boolean => json!("boolean"),
        ValueType::Null => json!("null"),
        ValueType::StrEnum(values) => json!({ "enum": values }),
    }
}

fn render_value(value: &ValueType, colors: Colors) -> String {
    match value {
        ValueType::String => "string".to_string(),
        ValueType::Number => "number".to_string(),
        ValueType::Boolean => "boolean".to_string(),
        ValueType::Null => "null".to_string(),
        ValueType::StrEnum(values) => values
            .iter()
            .map(|value| format!("{}\"{}\"{}", colors.green, value, colors.reset))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}
