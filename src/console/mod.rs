//! Console front-end: token input and the interactive game loop.

mod input;
mod orchestrator;

pub use input::{InputSource, ReadOutcome, TokenReader};
pub use orchestrator::Orchestrator;
