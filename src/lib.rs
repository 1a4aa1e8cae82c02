//! # InvestHub Mini
//!
//! Dashboard client for the InvestHub backend: markets, crypto, TON-chain
//! assets, NFTs, portfolio holdings, education content and news, shown as
//! nine read-only tabs.
//!
//! ## Modules
//!
//! - [`host`]: host-identity bridge supplying the session token
//! - [`api`]: HTTP client, safe fetch wrapper and response records
//! - [`state`]: data slots and the view shell
//! - [`pages`]: per-tab projections of the slots
//! - [`components`]: cards, charts and tabs
//! - [`render`]: terminal and JSON output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use investhub_mini::{get_identity_token, ApiClient, Tab, ViewShell};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = get_identity_token(None);
//!     let client = ApiClient::new("http://localhost:8000", token)?;
//!
//!     let mut shell = ViewShell::new();
//!     shell.mount(&client).await;
//!
//!     shell.select(Tab::Markets);
//!     println!("{}", investhub_mini::render::render_text(&shell.page(), shell.loaded_at()));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod components;
pub mod config;
pub mod host;
pub mod pages;
pub mod render;
pub mod state;

// Re-export top-level types for convenience
pub use api::{safe_get, ApiClient, ClientError, Endpoint, FetchError, INIT_DATA_HEADER};

pub use components::{Card, CardBody, Page, Row, Tab, TabParseError};

pub use config::{Config, ConfigError, LoadedConfig};

pub use host::{get_identity_token, EnvHost, HostBridge, NoHost, StaticHost};

pub use state::{DataSlots, Slot, ViewShell};
