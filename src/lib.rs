//! Failure aggregation and reporting for multi-stage site builds.
//!
//! Every pipeline stage returns an [`Outcome`]: success, optionally carrying
//! a value, or a [`Fault`] describing what went wrong. Stages that run a
//! batch of independent sub-operations fold their results with [`aggregate`]
//! or [`aggregate_values`], which keep every individual failure under a
//! label identifying the stage. Aggregates nest, so the final outcome of a
//! build is a tree recording exactly which stage, which item, and which
//! underlying cause produced each failure.
//!
//! When the pipeline finishes, [`render`] turns the outcome into an
//! indented, severity-annotated [`Report`] and [`show`] routes it to the
//! matching output channel.

mod diagnostics;
pub mod outcome;
pub mod platform;
pub mod report;
pub mod sink;
pub mod style;

pub use outcome::{aggregate, aggregate_values, Fault, Outcome, SourceMessage};
pub use platform::{MessageLookup, SystemLookup};
pub use report::{render, Renderer, Report, ReportLine, Severity};
pub use sink::{emit, show, Console, ReportSink};
pub use style::Theme;
