//! Interactive client variant.
//!
//! A [`Client`] is one view of a persisted record: it parses a [`Command`],
//! runs the matching transition, writes the record back and answers with a
//! [`Reply`]. Rendering is left to the caller.
mod app;
mod command;
mod export;
mod reply;
mod screen;

pub use app::*;
pub use command::*;
pub use export::*;
pub use reply::*;
pub use screen::*;
