use astgraft_core::ValueType;
use indexmap::IndexSet;

use crate::schema::{NodeSet, Parents, ResolvedNode, ResolvedProperty, Schema};

use super::config::{AbsentParent, Config};

/// Renders one schema to `.d.ts` source.
///
/// Declarations come out as blocks joined by blank lines: support types,
/// then one interface per node type in definition order, then the three
/// group aliases.
pub(super) struct Emitter<'a> {
    schema: &'a Schema,
    config: &'a Config,
}

impl<'a> Emitter<'a> {
    pub(super) fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self { schema, config }
    }

    pub(super) fn emit(&self) -> String {
        if self.schema.is_empty() {
            return String::new();
        }
        let mut blocks = Vec::new();
        if self.config.support_types {
            self.support_blocks(&mut blocks);
        }
        for node in self.schema.iter() {
            blocks.push(self.interface(node));
        }
        self.alias_blocks(&mut blocks);
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn support_blocks(&self, blocks: &mut Vec<String>) {
        let export = self.export_prefix();
        blocks.push(format!(
            "{export}interface Position {{\n  line: number;\n  column: number;\n}}"
        ));
        blocks.push(format!(
            "{export}interface SourceLocation {{\n  start: Position;\n  end: Position;\n}}"
        ));
        blocks.push(format!("{export}type Range = [number, number];"));
        if self.references_unknown() {
            blocks.push(format!(
                "{export}interface UnknownNodeType<Name extends string> {{\n  type: Name;\n}}"
            ));
        }
    }

    fn interface(&self, node: &ResolvedNode) -> String {
        let export = self.export_prefix();
        let mut out = format!("{export}interface {} {{\n", node.name);
        out.push_str(&format!("  type: \"{}\";\n", escape_string(&node.name)));
        for (name, property) in &node.properties {
            out.push_str(&format!(
                "  {}: {};\n",
                property_key(name),
                self.property_type(property)
            ));
        }
        out.push_str("  range: Range;\n");
        out.push_str("  loc: SourceLocation;\n");
        out.push_str(&format!("  parent: {};\n", self.parent_type(&node.parents)));
        if self.config.permissive_keys {
            out.push_str("  [key: string]: unknown;\n");
        }
        out.push('}');
        out
    }

    fn alias_blocks(&self, blocks: &mut Vec<String>) {
        let export = self.export_prefix();
        blocks.push(format!(
            "{export}type Statement = {};",
            union_or_never(self.schema.statement_kinds())
        ));
        blocks.push(format!(
            "{export}type Expression = {};",
            union_or_never(self.schema.expression_kinds())
        ));
        let all: IndexSet<String> = self.schema.iter().map(|node| node.name.clone()).collect();
        blocks.push(format!("{export}type Node = {};", union_or_never(&all)));
    }

    fn property_type(&self, property: &ResolvedProperty) -> String {
        match property {
            ResolvedProperty::Value(value) => value_type(value),
            ResolvedProperty::Node(set) => self.node_set(set),
            ResolvedProperty::NodeList(set) => {
                let element = self.node_set(set);
                if element.contains(" | ") {
                    format!("({element})[]")
                } else {
                    format!("{element}[]")
                }
            }
            ResolvedProperty::Union(members) => members
                .iter()
                .map(|member| self.property_type(member))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    fn node_set(&self, set: &NodeSet) -> String {
        if set.is_empty() {
            return "never".to_string();
        }
        let mut parts = Vec::with_capacity(set.len());
        if let Some(group) = self.schema.group_alias(&set.types) {
            parts.push(group.name().to_string());
        } else {
            parts.extend(set.types.iter().cloned());
        }
        parts.extend(
            set.unresolved
                .iter()
                .map(|name| format!("UnknownNodeType<\"{}\">", escape_string(name))),
        );
        parts.join(" | ")
    }

    fn parent_type(&self, parents: &Parents) -> String {
        match parents {
            Parents::None => match self.config.absent_parent {
                AbsentParent::Null => "null".to_string(),
                AbsentParent::Undefined => "undefined".to_string(),
            },
            Parents::Nodes(names) => match self.schema.group_alias(names) {
                Some(group) => group.name().to_string(),
                None => names.iter().cloned().collect::<Vec<_>>().join(" | "),
            },
        }
    }

    fn references_unknown(&self) -> bool {
        self.schema
            .iter()
            .any(|node| node.properties.values().any(property_has_unknown))
    }

    fn export_prefix(&self) -> &'static str {
        if self.config.export { "export " } else { "" }
    }
}

fn property_has_unknown(property: &ResolvedProperty) -> bool {
    match property {
        ResolvedProperty::Value(_) => false,
        ResolvedProperty::Node(set) | ResolvedProperty::NodeList(set) => {
            !set.unresolved.is_empty()
        }
        ResolvedProperty::Union(members) => members.iter().any(property_has_unknown),
    }
}

fn value_type(value: &ValueType) -> String {
    match value {
        ValueType::String => "string".to_string(),
        ValueType::Number => "number".to_string(),
        ValueType::Boolean => "boolean".to_string(),
        ValueType::Null => "null".to_string(),
        ValueType::StrEnum(values) => values
            .iter()
            .map(|value| format!("\"{}\"", escape_string(value)))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn union_or_never(names: &IndexSet<String>) -> String {
    if names.is_empty() {
        return "never".to_string();
    }
    names.iter().cloned().collect::<Vec<_>>().join(" | ")
}

/// Escape a string for a double-quoted TypeScript literal.
fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a property name as an interface key, quoting when it is not a
/// plain identifier.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
        }
        _ => false,
    };
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", escape_string(name))
    }
}
