pub mod runner;
pub mod script;

pub use crate::domain::model::{Person, Transcript};
pub use crate::domain::ports::{Console, ScriptSettings};
pub use crate::utils::error::Result;
