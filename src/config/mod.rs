pub mod toml_config;

use clap::Parser;
use serde::{Deserialize, Serialize};

pub use toml_config::ScriptConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "smoke-script")]
#[command(about = "Prints a fixed console smoke-check transcript")]
pub struct CliConfig {
    /// Optional TOML file overriding the script's literals
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit the transcript as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_script_config(&self) -> crate::Result<ScriptConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ScriptConfig::from_file(path)
            }
            None => Ok(ScriptConfig::default()),
        }
    }
}
