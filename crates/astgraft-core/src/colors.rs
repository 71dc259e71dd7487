//! ANSI color codes for terminal output.

/// ANSI color palette for CLI output.
///
/// Semantic colors with an orthogonal dim modifier:
/// - **Blue**: node-type names
/// - **Green**: string literals, enum values
/// - **Red** / **Yellow**: error and warning severities
/// - **Dim**: punctuation, labels, locations
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Colors = Colors {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Colors = Colors {
        blue: "",
        green: "",
        red: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(use_color: bool) -> Self {
        if use_color { Self::ON } else { Self::OFF }
    }
}
