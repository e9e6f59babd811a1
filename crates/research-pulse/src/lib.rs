//! research-pulse
//!
//! Backend aggregation service for a research dashboard. Fans out to the
//! OpenAlex bibliographic API and a chat-completion API, reshapes the
//! responses into dashboard views (trending-topic clouds, researcher
//! directories, chat recommendations, gamified paper reveals, life-path
//! stories), and serves shape-compatible static data whenever an upstream
//! call fails.
//!
//! # Example
//!
//! ```no_run
//! use research_pulse::{server, CompletionClient, Config, OpenAlexClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let openalex = OpenAlexClient::new(&config)?;
//!     let completion = CompletionClient::new(&config)?;
//!
//!     let app = server::create_router(server::AppState::new(openalex, completion));
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", 8000)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod completion;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod server;

pub use client::OpenAlexClient;
pub use completion::CompletionClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
