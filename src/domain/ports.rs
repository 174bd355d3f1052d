use crate::domain::model::Person;
use crate::utils::error::Result;
use std::fmt::Display;

/// Line-oriented text sink the script writes to.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Renders each argument and joins them with a single space, the way a
    /// console logger prints a multi-argument call.
    fn log(&mut self, parts: &[&dyn Display]) -> Result<()> {
        let line = parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.write_line(&line)
    }
}

pub trait ScriptSettings {
    fn sum_operands(&self) -> (i64, i64);
    fn greeting_name(&self) -> &str;
    fn multiply_operands(&self) -> (i64, i64);
    fn person(&self) -> Person;
}
