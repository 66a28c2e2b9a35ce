//! # CLI Module
//!
//! Command implementations behind the `freshcli` binary.
//!
//! - [`auth`] - Spotify OAuth 2.0 PKCE authorization
//! - [`sync`] - scan the feed, resolve tracks and sync them into the target
//!   playlists
//! - [`list_playlists`], [`add_playlists`], [`remove_playlists`] - manage the
//!   target playlists
//!
//! ```bash
//! freshcli auth
//! freshcli playlists add 37i9dQZF1DX0XUsuxWHRQd
//! freshcli sync --sort hot --limit 50 --fresh --verbose
//! ```
//!
//! Commands report through the crate's `info!`, `success!`, `warning!` and
//! `error!` macros; `error!` ends the process.

mod auth;
mod playlists;
mod sync;

pub use auth::auth;
pub use playlists::add_playlists;
pub use playlists::list_playlists;
pub use playlists::remove_playlists;
pub use sync::SyncArgs;
pub use sync::collect_tracks;
pub use sync::sync;
