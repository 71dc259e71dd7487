//! Diagnostic message types.

use std::fmt;

use super::path::SchemaPath;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics land on the same entry, the higher-priority one
/// suppresses the lower-priority one in filtered output. This keeps one
/// root cause from fanning out into a wall of follow-on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // A reserved name invalidates the whole entry that carries it
    ReservedNodeName,
    ReservedProperty,

    // Group binding problems
    MissingStatementBinding,
    MissingExpressionBinding,
    UnknownBindingTarget,
    MetaNameInBinding,

    // Reference problems
    UnknownRefTarget,
    EmptyRefList,

    // Observations, reported as warnings
    UnresolvedPassthrough,
    EmptyDefinition,
}

impl DiagnosticKind {
    /// Default severity for this diagnostic kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnresolvedPassthrough | Self::EmptyDefinition => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when both land on the same entry.
    ///
    /// Uses the enum discriminant order: earlier variant = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Observations that add nothing when real errors are present.
    pub(crate) fn is_consequence(&self) -> bool {
        matches!(self, Self::EmptyDefinition)
    }

    /// Default hint, automatically attached on creation.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingStatementBinding => {
                Some("add `statementType` listing the statement node types")
            }
            Self::MissingExpressionBinding => {
                Some("add `expressionType` listing the expression node types")
            }
            Self::MetaNameInBinding => Some("bindings list concrete node types only"),
            Self::UnknownRefTarget => {
                Some("define the node type, or reference `Node`, `Statement`, or `Expression`")
            }
            _ => None,
        }
    }

    /// Base message used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ReservedNodeName => "node type name is reserved",
            Self::ReservedProperty => "property name collides with a generated property",
            Self::MissingStatementBinding => "definition has no `statementType` binding",
            Self::MissingExpressionBinding => "definition has no `expressionType` binding",
            Self::UnknownBindingTarget => "binding target is not a defined node type",
            Self::MetaNameInBinding => "meta type in a group binding",
            Self::UnknownRefTarget => "unknown reference target",
            Self::EmptyRefList => "list property has no element types",
            Self::UnresolvedPassthrough => "reference target is not defined",
            Self::EmptyDefinition => "definition has no node types",
        }
    }

    /// Template for detailed messages. `{}` is the placeholder for detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ReservedNodeName => "`{}` is reserved and cannot name a node type".to_string(),
            Self::ReservedProperty => {
                "`{}` is generated on every node and cannot be declared".to_string()
            }
            Self::UnknownBindingTarget => "`{}` is not a defined node type".to_string(),
            Self::MetaNameInBinding => "`{}` is a meta type, not a node type".to_string(),
            Self::UnknownRefTarget => "`{}` is not a defined node type or meta type".to_string(),
            Self::UnresolvedPassthrough => {
                "`{}` is not defined and will surface as UnknownNodeType".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the message for this kind, with optional detail.
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Extra context pointing at a second entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) path: SchemaPath,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(path: SchemaPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

/// A diagnostic with its location and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) path: SchemaPath,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, path: SchemaPath, message: impl Into<String>) -> Self {
        let hints = kind
            .default_hint()
            .map(|hint| vec![hint.to_string()])
            .unwrap_or_default();
        Self {
            kind,
            path,
            message: message.into(),
            related: Vec::new(),
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, path: SchemaPath) -> Self {
        Self::new(kind, path, kind.fallback_message())
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity().is_error()
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity().is_warning()
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity(), self.path, self.message)?;
        for related in &self.related {
            write!(f, " (related: {} at {})", related.message, related.path)?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
