//! Farcaster Frame variant.
//!
//! Each Frame button posts to the server with a session id; the server
//! applies one transition to that session's in-memory state and answers with
//! a fresh card (HTML meta tags plus an SVG image URL).
mod lobby;
mod render;
mod server;
mod session;
mod store;

pub use lobby::*;
pub use render::*;
pub use server::*;
pub use session::*;
pub use store::*;

use crate::game::GameError;
