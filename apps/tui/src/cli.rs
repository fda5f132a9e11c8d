use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mbg-dash", version, about = "MBG Kabupaten Bandung dashboard")]
pub struct CliArgs {
    /// Fetch both datasets once, print the rollups, and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the main API base URL
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Override the target API base URL
    #[arg(long = "target-api-base", value_name = "URL")]
    pub target_api_base: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(base) = &self.api_base {
            std::env::set_var("MBG_API_BASE", base);
        }
        if let Some(base) = &self.target_api_base {
            std::env::set_var("MBG_TARGET_API_BASE", base);
        }
    }
}
