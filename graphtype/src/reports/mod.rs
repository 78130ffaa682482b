//! What the commands print.
//!
//! Ops return plain report values; rendering happens here against an
//! [`Output`](output::Output) so tests can record it.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, KindCount, RootInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
