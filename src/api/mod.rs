//! # API Module
//!
//! HTTP endpoints of the short-lived local server that completes the Spotify
//! OAuth flow started by `freshcli auth`.
//!
//! - [`callback`] - receives the authorization code and exchanges it for a
//!   token using the PKCE verifier kept in shared state
//! - [`health`] - reports status and version
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use freshcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
