use anyhow::Result;
use smoke_script::Transcript;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const EXPECTED_STDOUT: &str = "=== JavaScript 综合测试开始 ===
数字计算: 10 + 20 = 30
字符串操作: 你好，尹明华！
正在计算 6 × 7
函数返回结果: 42
对象测试: 我叫张三，今年25岁
=== 测试完成 ===
";

fn run_binary(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_smoke-script"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_stdout_is_exact_transcript() -> Result<()> {
    let output = run_binary(&[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, EXPECTED_STDOUT);
    assert!(!stdout.contains("所有测试都通过了！"));

    // Logs and the completion value go to stderr only.
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("所有测试都通过了！"));
    Ok(())
}

#[test]
fn test_verbose_does_not_touch_stdout() -> Result<()> {
    let output = run_binary(&["--verbose"])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED_STDOUT);
    Ok(())
}

#[test]
fn test_json_output_parses() -> Result<()> {
    let output = run_binary(&["--json"])?;

    assert!(output.status.success());
    let transcript: Transcript = serde_json::from_slice(&output.stdout)?;
    assert_eq!(transcript.lines.join("\n") + "\n", EXPECTED_STDOUT);
    assert_eq!(transcript.completion, "所有测试都通过了！");
    Ok(())
}

#[test]
fn test_overflow_config_exits_with_code_2() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[sum]\nlhs = 9223372036854775807\nrhs = 1")?;
    let path = file.path().to_str().ok_or_else(|| anyhow::anyhow!("non-utf8 temp path"))?;

    let output = run_binary(&["-c", path])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "=== JavaScript 综合测试开始 ===\n"
    );
    Ok(())
}

#[test]
fn test_invalid_config_exits_with_code_1() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[person]\nage = 200")?;
    let path = file.path().to_str().ok_or_else(|| anyhow::anyhow!("non-utf8 temp path"))?;

    let output = run_binary(&["-c", path])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}
