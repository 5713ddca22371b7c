use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for mangrovechat
#[derive(Parser, Debug)]
#[command(name = "mangrovechat")]
#[command(about = "Mangrove Chat - single-topic Q&A web app backed by Gemini")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Directory holding the persisted chat history
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Gemini model name
    #[arg(long, value_name = "MODEL", default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Base URL of the Generative Language API (e.g. http://localhost:8080
    /// for a local proxy); defaults to the official endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Gemini API key; read from the GEMINI_API_KEY environment variable
    /// (or .env) when not passed explicitly
    #[arg(long, value_name = "KEY", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
