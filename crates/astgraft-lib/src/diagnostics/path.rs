//! Paths addressing entries inside a definition document.

use std::fmt;

/// Location inside a definition document, e.g. `nodes.Program.body` or
/// `statementType[2]`.
///
/// Diagnostics carry paths instead of byte offsets: a definition is
/// structured data, usually merged from several layers, so a position in any
/// one source document would be meaningless by the time problems surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Key(String),
    Index(usize),
}

impl SchemaPath {
    /// The whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// A top-level key such as `statementType`.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Key(key.into())],
        }
    }

    /// A node-type entry: `nodes.<name>`.
    pub fn node(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Key("nodes".to_string()), Segment::Key(name.into())],
        }
    }

    /// A property entry: `nodes.<node>.<property>`.
    pub fn property(node: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            segments: vec![
                Segment::Key("nodes".to_string()),
                Segment::Key(node.into()),
                Segment::Key(property.into()),
            ],
        }
    }

    /// An entry in a group binding: `<key>[<index>]`.
    pub fn binding(key: impl Into<String>, index: usize) -> Self {
        Self {
            segments: vec![Segment::Key(key.into()), Segment::Index(index)],
        }
    }

    /// Whether `self` addresses an entry strictly enclosing `other`.
    pub(crate) fn contains(&self, other: &SchemaPath) -> bool {
        self.segments.len() < other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("definition");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
