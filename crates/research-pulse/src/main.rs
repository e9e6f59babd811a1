//! research-pulse - entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use research_pulse::{server, CompletionClient, Config, OpenAlexClient};

#[derive(Parser, Debug)]
#[command(name = "research-pulse")]
#[command(about = "Dashboard aggregation backend over the OpenAlex API")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Contact e-mail for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Completion API key (chat views degrade to placeholders without it)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    completion_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cli.port,
        polite_pool = cli.mailto.is_some(),
        "Starting research-pulse"
    );

    let config = Config::new(cli.mailto, cli.completion_api_key);
    let openalex = OpenAlexClient::new(&config)?;
    let completion = CompletionClient::new(&config)?;

    let app = server::create_router(server::AppState::new(openalex, completion));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
