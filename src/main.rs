use clap::Parser;
use smoke_script::adapters::console::write_transcript_json;
use smoke_script::utils::error::ErrorSeverity;
use smoke_script::utils::logger;
use smoke_script::{BufferConsole, CliConfig, ScriptError, ScriptRunner, StdoutConsole, Transcript};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting smoke-script");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Script failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2, // 計算錯誤
            ErrorSeverity::High => 1,   // 配置錯誤
            ErrorSeverity::Critical => 3, // 輸出錯誤
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), ScriptError> {
    let script_config = config.load_script_config()?;
    let runner = ScriptRunner::new(script_config);

    let completion = if config.json {
        let mut console = BufferConsole::new();
        let completion = runner.run(&mut console)?;
        let transcript = Transcript {
            lines: console.into_lines(),
            completion: completion.clone(),
        };
        write_transcript_json(std::io::stdout().lock(), &transcript)?;
        completion
    } else {
        runner.run(&mut StdoutConsole::new())?
    };

    tracing::info!("✅ {}", completion);
    Ok(())
}
