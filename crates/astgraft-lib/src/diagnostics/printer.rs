//! Text rendering for diagnostics.
//!
//! Output follows the familiar compiler shape, with a document path where a
//! source span would normally go:
//!
//! ```text
//! error: `Bogus` is not a defined node type or meta type
//!   --> nodes.Foo.target
//!   = help: define the node type, or reference `Node`, `Statement`, or `Expression`
//! ```

use astgraft_core::Colors;

use super::message::{DiagnosticMessage, Severity};

/// Renders diagnostics as text, one block per message.
pub struct DiagnosticsPrinter {
    messages: Vec<DiagnosticMessage>,
    colors: Colors,
}

impl DiagnosticsPrinter {
    pub(crate) fn new(messages: Vec<DiagnosticMessage>) -> Self {
        Self {
            messages,
            colors: Colors::OFF,
        }
    }

    /// Enable or disable ANSI colors.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Render every message. Empty input renders as the empty string.
    pub fn render(&self) -> String {
        let blocks: Vec<String> = self
            .messages
            .iter()
            .map(|message| self.render_message(message))
            .collect();
        if blocks.is_empty() {
            return String::new();
        }
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn render_message(&self, message: &DiagnosticMessage) -> String {
        let c = &self.colors;
        let severity_color = match message.severity() {
            Severity::Error => c.red,
            Severity::Warning => c.yellow,
        };

        let mut block = format!(
            "{}{}{}: {}",
            severity_color,
            message.severity(),
            c.reset,
            message.message
        );
        block.push_str(&format!("\n  {}-->{} {}", c.dim, c.reset, message.path));
        for related in &message.related {
            block.push_str(&format!(
                "\n  {}= note:{} {} ({})",
                c.dim, c.reset, related.message, related.path
            ));
        }
        for hint in &message.hints {
            block.push_str(&format!("\n  {}= help:{} {}", c.dim, c.reset, hint));
        }
        block
    }
}
