use backend::config::{DEFAULT_API_BASE, DEFAULT_MODEL};
use clap::Parser;
use std::net::IpAddr;

#[derive(Parser)]
#[command(about = "Relays game chat to Gemini and returns emotion-tagged replies")]
pub struct Cli {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}
