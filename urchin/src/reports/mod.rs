//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target, keeping
//! data collection separate from presentation.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Output, Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::RecordingOutput;
