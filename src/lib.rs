pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::{BufferConsole, StdoutConsole};
pub use config::{CliConfig, ScriptConfig};
pub use core::runner::ScriptRunner;
pub use domain::model::{Person, Transcript};
pub use utils::error::{Result, ScriptError};
