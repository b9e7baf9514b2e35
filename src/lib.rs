pub mod cli;
pub mod command;
pub mod context;
pub mod error;
pub mod forge;
pub mod inputs;
pub mod outputs;

pub use error::{ReleaseditError, Result};
