pub mod backup;
pub mod db;
pub mod error;
pub mod import;
pub mod logging;
pub mod positions;
pub mod program;
pub mod report;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use program::Program;
