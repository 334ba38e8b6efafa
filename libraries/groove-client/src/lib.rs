//! Groove Client
//!
//! HTTP client for the Groove library API. Besides one call per listing
//! endpoint it provides [`GrooveClient::load_page`], which fetches all
//! three listings concurrently and merges them into a [`PageData`].
//!
//! # Example
//!
//! ```no_run
//! use groove_client::GrooveClient;
//!
//! # async fn example() -> Result<(), groove_client::ClientError> {
//! let client = GrooveClient::new("http://localhost:8080")?;
//! let page = client.load_page().await?;
//! println!("{} tracks", page.tracks.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`PageData`]: groove_core::types::PageData

mod client;
mod error;

pub use client::GrooveClient;
pub use error::{ClientError, Result};
