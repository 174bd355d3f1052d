use crate::core::script;
use crate::core::{Console, Result, ScriptSettings};
use crate::domain::model::COMPLETION_MESSAGE;

pub struct ScriptRunner<S: ScriptSettings> {
    settings: S,
}

impl<S: ScriptSettings> ScriptRunner<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Runs every step in order and returns the script's completion value.
    /// The first failing step aborts the run; lines already written stay written.
    pub fn run<C: Console>(&self, console: &mut C) -> Result<String> {
        tracing::debug!("Running smoke-check script");

        script::opening_banner(console)?;

        let (lhs, rhs) = self.settings.sum_operands();
        let sum = script::print_sum(console, lhs, rhs)?;
        tracing::debug!(lhs, rhs, sum, "sum step done");

        let message = script::print_greeting(console, self.settings.greeting_name())?;
        tracing::debug!(%message, "greeting step done");

        let (lhs, rhs) = self.settings.multiply_operands();
        let product = script::print_product(console, lhs, rhs)?;
        tracing::debug!(lhs, rhs, product, "multiply step done");

        let person = self.settings.person();
        script::print_introduction(console, &person)?;
        tracing::debug!(name = %person.name, age = person.age, "person step done");

        script::closing_banner(console)?;

        Ok(COMPLETION_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::config::toml_config::ScriptConfig;

    #[test]
    fn test_run_default_transcript() {
        let runner = ScriptRunner::new(ScriptConfig::default());
        let mut console = BufferConsole::new();
        let completion = runner.run(&mut console).unwrap();

        assert_eq!(completion, "所有测试都通过了！");
        assert_eq!(
            console.lines(),
            [
                "=== JavaScript 综合测试开始 ===",
                "数字计算: 10 + 20 = 30",
                "字符串操作: 你好，尹明华！",
                "正在计算 6 × 7",
                "函数返回结果: 42",
                "对象测试: 我叫张三，今年25岁",
                "=== 测试完成 ===",
            ]
        );
    }

    #[test]
    fn test_run_stops_at_overflow() {
        let config = ScriptConfig::from_toml_str("[sum]\nlhs = 9223372036854775807\nrhs = 1\n")
            .unwrap();
        let runner = ScriptRunner::new(config);
        let mut console = BufferConsole::new();

        assert!(runner.run(&mut console).is_err());
        assert_eq!(console.lines(), ["=== JavaScript 综合测试开始 ==="]);
    }
}
