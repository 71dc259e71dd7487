//! JSON deserialization for definition documents.
//!
//! Authored definitions use compact property spellings:
//!
//! | JSON                        | Meaning                               |
//! |-----------------------------|---------------------------------------|
//! | `"string"` etc.             | plain value type                      |
//! | `{"enum": ["a", "b"]}`      | closed set of string literals         |
//! | `{"ref": "Expression"}`     | single child position                 |
//! | `{"list": "Statement"}`     | sequence; also takes an array of names|
//! | `[spec, spec, ...]`         | union of alternatives                 |
//!
//! `statementType` and `expressionType` take one name or an array of names.

use indexmap::IndexMap;
use serde::Deserialize;

use super::merge::normalize_union;
use super::types::{Definition, NodeShape, Property, ValueType};

/// Error loading a definition.
#[derive(Debug)]
pub enum DefinitionError {
    /// JSON syntax or structure problem.
    Json(serde_json::Error),
    /// Binary decode problem.
    Binary(postcard::Error),
    /// Well-formed JSON that is not a valid definition.
    Schema {
        /// Dotted path to the offending entry, e.g. `nodes.Program.body`.
        path: String,
        message: String,
    },
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Binary(e) => write!(f, "binary decode error: {e}"),
            Self::Schema { path, message } => {
                write!(f, "invalid definition at {path}: {message}")
            }
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Binary(e) => Some(e),
            Self::Schema { .. } => None,
        }
    }
}

impl Definition {
    /// Parse a definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let raw: RawDefinition = serde_json::from_str(json).map_err(DefinitionError::Json)?;
        raw.try_into()
    }
}

// --- Raw deserialization layer (1:1 with the authored JSON) ---

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    nodes: IndexMap<String, IndexMap<String, RawProperty>>,
    #[serde(default, rename = "statementType")]
    statement_type: Option<RawNames>,
    #[serde(default, rename = "expressionType")]
    expression_type: Option<RawNames>,
}

/// One name or an array of names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNames {
    One(String),
    Many(Vec<String>),
}

impl RawNames {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawNames::One(name) => vec![name],
            RawNames::Many(names) => names,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProperty {
    /// Bare value-type keyword such as `"string"`.
    Kind(String),
    /// Object form: `{"ref": ...}`, `{"list": ...}`, or `{"enum": ...}`.
    Shaped(RawShaped),
    /// Array form: union of alternatives.
    Union(Vec<RawProperty>),
}

#[derive(Debug, Deserialize)]
struct RawShaped {
    #[serde(default)]
    r#ref: Option<String>,
    #[serde(default)]
    list: Option<RawNames>,
    #[serde(default, rename = "enum")]
    values: Option<Vec<String>>,
}

impl TryFrom<RawDefinition> for Definition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, DefinitionError> {
        let mut nodes = IndexMap::with_capacity(raw.nodes.len());
        for (node_name, raw_properties) in raw.nodes {
            let mut properties = IndexMap::with_capacity(raw_properties.len());
            for (property_name, raw_property) in raw_properties {
                let path = format!("nodes.{node_name}.{property_name}");
                properties.insert(property_name, convert_property(raw_property, &path)?);
            }
            nodes.insert(node_name, NodeShape { properties });
        }

        Ok(Definition {
            nodes,
            statement_kinds: raw.statement_type.map(RawNames::into_vec).unwrap_or_default(),
            expression_kinds: raw.expression_type.map(RawNames::into_vec).unwrap_or_default(),
        })
    }
}

fn convert_property(raw: RawProperty, path: &str) -> Result<Property, DefinitionError> {
    match raw {
        RawProperty::Kind(kind) => match kind.as_str() {
            "string" => Ok(Property::Value(ValueType::String)),
            "number" => Ok(Property::Value(ValueType::Number)),
            "boolean" => Ok(Property::Value(ValueType::Boolean)),
            "null" => Ok(Property::Value(ValueType::Null)),
            other => Err(schema_error(
                path,
                format!("unknown value type `{other}` (expected string, number, boolean, or null)"),
            )),
        },
        RawProperty::Shaped(shaped) => convert_shaped(shaped, path),
        RawProperty::Union(members) => {
            if members.is_empty() {
                return Err(schema_error(path, "union cannot be empty"));
            }
            let members = members
                .into_iter()
                .map(|member| convert_property(member, path))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(normalize_union(members))
        }
    }
}

fn convert_shaped(shaped: RawShaped, path: &str) -> Result<Property, DefinitionError> {
    match (shaped.r#ref, shaped.list, shaped.values) {
        (Some(name), None, None) => Ok(Property::Ref(name)),
        (None, Some(names), None) => {
            let names = names.into_vec();
            if names.is_empty() {
                return Err(schema_error(path, "list cannot be empty"));
            }
            Ok(Property::RefList(names))
        }
        (None, None, Some(values)) => {
            if values.is_empty() {
                return Err(schema_error(path, "enum cannot be empty"));
            }
            Ok(Property::Value(ValueType::StrEnum(values)))
        }
        _ => Err(schema_error(
            path,
            "property object needs exactly one of `ref`, `list`, or `enum`",
        )),
    }
}

fn schema_error(path: &str, message: impl Into<String>) -> DefinitionError {
    DefinitionError::Schema {
        path: path.to_string(),
        message: message.into(),
    }
}
