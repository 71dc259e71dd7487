//! Diagnostics collection and rendering.
//!
//! Problems inside a definition are recoverable: every stage keeps going and
//! records what it found, so one run reports everything wrong with the
//! document. [`Diagnostics`] collects the messages; [`DiagnosticsPrinter`]
//! renders them addressed by [`SchemaPath`].

mod message;
mod path;
mod printer;


pub use message::{DiagnosticKind, RelatedInfo, Severity};
pub use path::SchemaPath;
pub use printer::DiagnosticsPrinter;

use message::DiagnosticMessage;

/// Collected diagnostics from one or more compilation stages.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a diagnostic of `kind` at `path`.
    ///
    /// Returns a builder; nothing is recorded until
    /// [`emit`](DiagnosticBuilder::emit) is called.
    pub fn report(&mut self, kind: DiagnosticKind, path: SchemaPath) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            message: DiagnosticMessage::with_default_message(kind, path),
            diagnostics: self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(DiagnosticMessage::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(DiagnosticMessage::is_warning)
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_warning()).count()
    }

    /// Absorb another collection, keeping message order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// One-line summaries of every message, unfiltered.
    pub fn lines(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.to_string()).collect()
    }

    /// Messages with cascading noise suppressed.
    ///
    /// Suppression rules:
    /// 1. Containment: a higher-priority diagnostic on an enclosing path
    ///    suppresses diagnostics beneath it
    /// 2. Same path: the higher-priority kind wins
    /// 3. Observations (e.g. `EmptyDefinition`) drop out when any error
    ///    is present
    pub(crate) fn filtered(&self) -> Vec<DiagnosticMessage> {
        if self.messages.is_empty() {
            return Vec::new();
        }

        let mut suppressed = vec![false; self.messages.len()];

        if self.has_errors() {
            for (i, message) in self.messages.iter().enumerate() {
                if message.kind.is_consequence() {
                    suppressed[i] = true;
                }
            }
        }

        // O(n^2), fine for the message counts real definitions produce
        for (i, a) in self.messages.iter().enumerate() {
            if suppressed[i] {
                continue;
            }
            for (j, b) in self.messages.iter().enumerate() {
                if i == j || suppressed[j] {
                    continue;
                }
                let same_entry = a.path == b.path;
                let encloses = a.path.contains(&b.path);
                if (same_entry || encloses) && a.kind.suppresses(&b.kind) {
                    suppressed[j] = true;
                }
            }
        }

        self.messages
            .iter()
            .zip(&suppressed)
            .filter(|(_, s)| !**s)
            .map(|(m, _)| m.clone())
            .collect()
    }

    /// Printer over all messages.
    pub fn printer(&self) -> DiagnosticsPrinter {
        DiagnosticsPrinter::new(self.messages.clone())
    }

    /// Printer over filtered messages.
    pub fn filtered_printer(&self) -> DiagnosticsPrinter {
        DiagnosticsPrinter::new(self.filtered())
    }

    /// Render all messages without colors.
    pub fn render(&self) -> String {
        self.printer().render()
    }

    /// Render all messages, optionally colored.
    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }

    /// Render filtered messages without colors.
    pub fn render_filtered(&self) -> String {
        self.filtered_printer().render()
    }

    /// Render filtered messages, optionally colored.
    pub fn render_filtered_colored(&self, colored: bool) -> String {
        self.filtered_printer().colored(colored).render()
    }
}

/// Builder for one diagnostic. Created by [`Diagnostics::report`].
#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    message: DiagnosticMessage,
    diagnostics: &'a mut Diagnostics,
}

impl DiagnosticBuilder<'_> {
    /// Set the detail, rendered through the kind's message template.
    pub fn message(mut self, detail: impl AsRef<str>) -> Self {
        self.message.message = self.message.kind.message(Some(detail.as_ref()));
        self
    }

    /// Point at a second entry that gives the diagnostic context.
    pub fn related_to(mut self, path: SchemaPath, message: impl Into<String>) -> Self {
        self.message.related.push(RelatedInfo::new(path, message));
        self
    }

    /// Attach an extra hint line.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Record the diagnostic.
    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
