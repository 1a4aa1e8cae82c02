//! InvestHub API Client Layer
//!
//! Everything between the identity token and the view slots.
//!
//! - [`ApiClient`]: `reqwest` client bound to the base URL, sending the
//!   `Telegram-Init-Data` header on every call
//! - [`safe_get`]: one endpoint fetch with silent fallback
//! - [`Endpoint`]: the sixteen paths fetched on mount
//! - [`dto`]: optional-field response records per endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use investhub_mini::api::{safe_get, ApiClient, Endpoint};
//! use investhub_mini::api::dto::Profile;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8000", "")?;
//!     let profile: Profile = safe_get(&client, Endpoint::Profile.path(), Profile::default()).await;
//!     println!("tier: {:?}", profile.tier);
//!     Ok(())
//! }
//! ```

mod client;
pub mod dto;
mod endpoints;
pub mod error;
mod safe;

pub use client::{ApiClient, INIT_DATA_HEADER};
pub use endpoints::Endpoint;
pub use error::{ClientError, FetchError, FetchResult};
pub use safe::{safe_get, safe_get_or_default};
