//! Colored styling for rendered reports.

use console::Style;

/// The styles applied to report lines.
///
/// `console` only emits escape codes when the target stream is a terminal,
/// so the default theme degrades to plain text everywhere else.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Aggregate header lines.
    pub header: Style,
    /// Leaf error lines.
    pub alert: Style,
    /// Success lines.
    pub info: Style,
    /// The bullet marker in front of nested lines.
    pub bullet: Style,
}

impl Theme {
    /// A theme that applies no styling at all.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            alert: Style::new(),
            info: Style::new(),
            bullet: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::new().red().bold(),
            alert: Style::new().red(),
            info: Style::new(),
            bullet: Style::new().red(),
        }
    }
}
