use clap::Parser;

/// Server configuration parsed from command line arguments and environment
/// variables.
///
/// Base URL and credential sourcing live here, outside the data pipeline,
/// so the pipeline itself carries no ambient state.
#[derive(Parser, Debug)]
#[command(name = "scoap3-portal")]
#[command(
    author,
    version,
    about = "Landing-page server for the open access article repository"
)]
#[command(after_help = "Examples:
  scoap3-portal --api-base-url https://backend.scoap3.org/api/
  API_BASE_URL=https://backend.scoap3.org/api/ API_AUTH_TOKEN=... scoap3-portal")]
pub struct Config {
    /// Base URL of the backend search API
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: String,

    /// Backend API token, forwarded as `Authorization: Token <key>`
    #[arg(long, env = "API_AUTH_TOKEN")]
    pub api_auth_token: Option<String>,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind_addr: String,
}
