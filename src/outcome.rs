//! The outcome type shared by every pipeline stage, and the aggregation
//! operations that fold a batch of outcomes into a single verdict.
//!
//! Stages that run over collections of independent items (posts, pages,
//! output files) produce one [`Outcome`] per item and combine them with
//! [`aggregate`] or [`aggregate_values`]. Aggregates nest, so a failure
//! deep inside a batch keeps the full chain of stage labels above it.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// The outcome of one pipeline operation.
///
/// `Ok(())` is the bare success marker; stages with something to return use
/// `Ok(value)`. Failures carry a [`Fault`].
pub type Outcome<T = ()> = std::result::Result<T, Fault>;

/// The payload of a failed [`Outcome`].
///
/// Faults form a tree: leaf descriptions, optionally tied to a source
/// location, and labeled aggregates of the failures collected from a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A flat human-readable failure description.
    #[error("{0}")]
    Message(String),

    /// A failure attributable to a specific source file.
    ///
    /// `line` is `None` when the location is known but the line is not.
    #[error("{}", located(.file, .line, .message))]
    Located {
        file: PathBuf,
        line: Option<u32>,
        message: SourceMessage,
    },

    /// The failures collected from a batch of sub-operations.
    ///
    /// `label` identifies the aggregating stage. `causes` holds only the
    /// failed members, in input order, and is never empty when built by
    /// [`aggregate`] or [`aggregate_values`].
    #[error("{label}")]
    Aggregate { label: String, causes: Vec<Fault> },
}

impl Fault {
    pub fn message(text: impl Into<String>) -> Self {
        Fault::Message(text.into())
    }

    pub fn in_file(
        file: impl Into<PathBuf>,
        line: impl Into<Option<u32>>,
        text: impl Into<String>,
    ) -> Self {
        Fault::Located {
            file: file.into(),
            line: line.into(),
            message: SourceMessage::Text(text.into()),
        }
    }

    /// A failure carrying a raw platform error code, resolved to a message
    /// when the fault is rendered.
    pub fn os_error(file: impl Into<PathBuf>, line: impl Into<Option<u32>>, code: i32) -> Self {
        Fault::Located {
            file: file.into(),
            line: line.into(),
            message: SourceMessage::Code(code),
        }
    }

    /// Ties an I/O error to the file it occurred on, keeping the raw
    /// platform code when the error carries one.
    pub fn io(file: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => Self::os_error(file, None, code),
            None => Self::in_file(file, None, err.to_string()),
        }
    }
}

impl From<String> for Fault {
    fn from(text: String) -> Self {
        Fault::Message(text)
    }
}

impl From<&str> for Fault {
    fn from(text: &str) -> Self {
        Fault::Message(text.to_string())
    }
}

/// The text of a [`Fault::Located`]: either free text, or a raw platform
/// error code that gets resolved through a
/// [`MessageLookup`](crate::platform::MessageLookup) at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMessage {
    Text(String),
    Code(i32),
}

impl fmt::Display for SourceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMessage::Text(text) => f.write_str(text),
            SourceMessage::Code(code) => write!(f, "os error {code}"),
        }
    }
}

pub(crate) fn format_located(file: &Path, line: Option<u32>, message: impl fmt::Display) -> String {
    match line {
        Some(line) => format!("{}:{line}: {message}", file.display()),
        None => format!("{}: {message}", file.display()),
    }
}

fn located(file: &Path, line: &Option<u32>, message: &SourceMessage) -> String {
    format_located(file, *line, message)
}

/// Folds a batch of valueless outcomes into one.
///
/// Returns `Ok(())` when every member succeeded (an empty batch counts as
/// success). Otherwise the failed members, in input order, end up under a
/// [`Fault::Aggregate`] labeled with the calling stage.
pub fn aggregate(
    results: impl IntoIterator<Item = Outcome>,
    label: impl Into<String>,
) -> Outcome {
    aggregate_values(results, label).map(|_| ())
}

/// Like [`aggregate`], but keeps the carried values.
///
/// On success the values come back in input order. The failure path is
/// shared with [`aggregate`], so choosing the wrong entry point can never
/// lose failure detail.
pub fn aggregate_values<T>(
    results: impl IntoIterator<Item = Outcome<T>>,
    label: impl Into<String>,
) -> Outcome<Vec<T>> {
    let mut values = Vec::new();
    let mut causes = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(fault) => causes.push(fault),
        }
    }

    if causes.is_empty() {
        Ok(values)
    } else {
        let label = label.into();
        debug!(
            "{label}: {} of {} operations failed",
            causes.len(),
            causes.len() + values.len()
        );
        Err(Fault::Aggregate { label, causes })
    }
}
