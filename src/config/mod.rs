pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
pub use toml_config::CheckConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "site-check")]
#[command(about = "Parse, normalize and validate seismic Site records")]
pub struct CliConfig {
    /// JSON file holding one Site object or an array of them ("-" for stdin)
    pub input: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print each report")]
    pub pretty: bool,

    #[arg(long, help = "Exit with status 2 when any record is invalid")]
    pub fail_on_invalid: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<CheckConfig> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::from_file(path)?,
            None => CheckConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if self.pretty {
            config.output.pretty = true;
        }
        if self.fail_on_invalid {
            config.validation.fail_on_invalid = true;
        }

        config.validate()?;
        Ok(config)
    }
}
