//! Renders an [`Outcome`] into indented, severity-annotated text.
//!
//! Rendering walks the fault tree: aggregate labels become header lines and
//! their causes are indented one level deeper, so every leaf failure shows
//! up under the full chain of stage labels that led to it.

use std::fmt;

use crate::{
    outcome::{format_located, Fault, Outcome, SourceMessage},
    platform::{MessageLookup, SystemLookup},
    style::Theme,
};

/// Display classification for a rendered line, used to pick its style and
/// to route a finished report to the right output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// One line of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    severity: Severity,
    heading: bool,
    depth: usize,
    text: String,
}

impl ReportLine {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// True for aggregate header lines, which get the emphasized style.
    pub fn is_heading(&self) -> bool {
        self.heading
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A fully rendered outcome.
///
/// Lines carry their severity and nesting depth so a styling collaborator
/// can decorate them; [`Report::styled`] does this with a [`Theme`], and the
/// plain `Display` form applies no styling at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    severity: Severity,
    lines: Vec<ReportLine>,
}

impl Report {
    /// The channel this report belongs on: `Info` for a rendered success,
    /// `Error` for any failure.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines.iter()
    }

    /// Renders the report with `theme` applied to each line.
    pub fn styled(&self, theme: &Theme) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // Depth zero has no marker; every deeper level is indented by
            // two spaces per level past the first, then bulleted.
            if line.depth > 0 {
                out.push_str(&"  ".repeat(line.depth - 1));
                out.push_str(&theme.bullet.apply_to("*").to_string());
                out.push(' ');
            }
            let style = if line.heading {
                &theme.header
            } else {
                match line.severity {
                    Severity::Info => &theme.info,
                    Severity::Error => &theme.alert,
                }
            };
            out.push_str(&style.apply_to(line.text.as_str()).to_string());
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.styled(&Theme::plain()))
    }
}

/// Renders outcomes into [`Report`]s.
///
/// Holds the lookup used to resolve platform error codes at render time, so
/// callers that need deterministic messages can inject their own table.
pub struct Renderer<'a> {
    messages: &'a dyn MessageLookup,
}

impl<'a> Renderer<'a> {
    pub fn new(messages: &'a dyn MessageLookup) -> Self {
        Self { messages }
    }

    /// Renders `outcome` starting at indentation level `depth`.
    pub fn render<T>(&self, outcome: &Outcome<T>, depth: usize) -> Report {
        match outcome {
            Ok(_) => Report {
                severity: Severity::Info,
                lines: vec![ReportLine {
                    severity: Severity::Info,
                    heading: false,
                    depth,
                    text: "No error detected".to_string(),
                }],
            },
            Err(fault) => {
                let mut lines = Vec::new();
                self.fault(fault, depth, &mut lines);
                Report {
                    severity: Severity::Error,
                    lines,
                }
            }
        }
    }

    fn fault(&self, fault: &Fault, depth: usize, lines: &mut Vec<ReportLine>) {
        match fault {
            Fault::Message(text) => lines.push(ReportLine {
                severity: Severity::Error,
                heading: false,
                depth,
                text: text.clone(),
            }),
            Fault::Located {
                file,
                line,
                message,
            } => {
                let message = match message {
                    SourceMessage::Text(text) => text.clone(),
                    SourceMessage::Code(code) => self.messages.message(*code),
                };
                lines.push(ReportLine {
                    severity: Severity::Error,
                    heading: false,
                    depth,
                    text: format_located(file, *line, message),
                });
            }
            Fault::Aggregate { label, causes } => {
                lines.push(ReportLine {
                    severity: Severity::Error,
                    heading: true,
                    depth,
                    text: format!("{label}:"),
                });
                for cause in causes {
                    self.fault(cause, depth + 1, lines);
                }
            }
        }
    }
}

/// Renders `outcome` with the operating system's error message lookup.
pub fn render<T>(outcome: &Outcome<T>) -> Report {
    Renderer::new(&SystemLookup).render(outcome, 0)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        outcome::{aggregate, Fault, Outcome},
        platform::MessageLookup,
        style::Theme,
    };

    use super::{render, Renderer, Severity};

    struct PosixTable;

    impl MessageLookup for PosixTable {
        fn message(&self, code: i32) -> String {
            match code {
                2 => "no such file or directory".to_string(),
                13 => "permission denied".to_string(),
                _ => format!("unknown error {code}"),
            }
        }
    }

    #[test]
    fn success_reports_no_error() {
        let outcome: Outcome = Ok(());
        let report = render(&outcome);

        assert_eq!(report.severity(), Severity::Info);
        assert_eq!(report.to_string(), "No error detected");
    }

    #[test]
    fn success_is_indented_at_depth() {
        let outcome: Outcome = Ok(());
        let report = Renderer::new(&PosixTable).render(&outcome, 2);

        assert_eq!(report.to_string(), "  * No error detected");
    }

    #[test]
    fn leaf_message_renders_bare() {
        let outcome: Outcome = Err(Fault::message("boom"));
        let report = render(&outcome);

        assert_eq!(report.severity(), Severity::Error);
        assert_eq!(report.to_string(), "boom");
    }

    #[test]
    fn located_line_suffix_tracks_known_line() {
        let without: Outcome = Err(Fault::in_file("posts/a.md", None, "missing title"));
        assert_eq!(render(&without).to_string(), "posts/a.md: missing title");

        let with: Outcome = Err(Fault::in_file("posts/a.md", 12, "missing title"));
        assert_eq!(render(&with).to_string(), "posts/a.md:12: missing title");
    }

    #[test]
    fn platform_codes_are_resolved_before_formatting() {
        let outcome: Outcome = Err(Fault::os_error("posts/a.md", None, 2));
        let report = Renderer::new(&PosixTable).render(&outcome, 0);

        assert_eq!(report.to_string(), "posts/a.md: no such file or directory");
        assert!(!report.to_string().contains('2'));
    }

    #[test]
    fn nested_aggregates_render_as_a_bullet_tree() {
        let stage_a = aggregate([Ok(()), Err(Fault::message("bad input")), Ok(())], "stage A");
        let stage_b = aggregate([stage_a], "stage B");
        let report = render(&stage_b);

        assert_eq!(report.to_string(), "stage B:\n* stage A:\n  * bad input");
    }

    #[test]
    fn children_are_strictly_deeper_than_their_parent() {
        let stage_a = aggregate([Err(Fault::message("bad input"))], "stage A");
        let stage_b = aggregate([stage_a], "stage B");
        let report = render(&stage_b);

        let depths: Vec<_> = report.lines().map(|line| line.depth()).collect();
        assert_eq!(depths, [0, 1, 2]);

        let headings: Vec<_> = report.lines().map(|line| line.is_heading()).collect();
        assert_eq!(headings, [true, true, false]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let stage = aggregate([Err(Fault::message("bad input"))], "stage A");
        assert_eq!(render(&stage).to_string(), render(&stage).to_string());
    }

    #[test]
    fn plain_theme_matches_unstyled_display() {
        let stage = aggregate([Err(Fault::in_file("posts/a.md", 3, "bad link"))], "checking links");
        let report = render(&stage);

        assert_eq!(report.styled(&Theme::plain()), report.to_string());
    }
}
