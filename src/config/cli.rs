use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-front")]
#[command(about = "Terminal front-end that displays a greeting from the backend")]
pub struct CliConfig {
    /// Base URL of the backend exposing /api/hello
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub backend_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)
    }
}
