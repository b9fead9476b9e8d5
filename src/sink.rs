//! Output sinks that finished reports are routed to.

use console::Term;
use tracing::debug;

use crate::{
    outcome::Outcome,
    report::{render, Report, Severity},
    style::Theme,
};

/// Accepts finished report text, one method per severity channel.
pub trait ReportSink {
    fn info(&mut self, text: &str);
    fn error(&mut self, text: &str);
}

/// Writes informational reports to stdout and failures to stderr.
pub struct Console {
    out: Term,
    err: Term,
}

impl Console {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for Console {
    fn info(&mut self, text: &str) {
        let _ = self.out.write_line(text);
    }

    fn error(&mut self, text: &str) {
        let _ = self.err.write_line(text);
    }
}

/// Captures reports in memory, tagged with the channel they went to.
impl ReportSink for Vec<(Severity, String)> {
    fn info(&mut self, text: &str) {
        self.push((Severity::Info, text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.push((Severity::Error, text.to_string()));
    }
}

/// Renders `outcome` and writes it to the matching channel of `sink`.
pub fn show<T>(outcome: &Outcome<T>, sink: &mut dyn ReportSink) {
    emit(&render(outcome), &Theme::default(), sink);
}

/// Writes an already rendered report to the matching channel of `sink`.
pub fn emit(report: &Report, theme: &Theme, sink: &mut dyn ReportSink) {
    debug!("emitting {} report line(s)", report.lines().count());
    let text = report.styled(theme);
    match report.severity() {
        Severity::Info => sink.info(&text),
        Severity::Error => sink.error(&text),
    }
}
