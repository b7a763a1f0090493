//! Quiz sessions built on top of the frontier model.
//!
//! A session synthesizes a frontier, asks which entry a search strategy expands
//! next, and grades answers against every entry the strategy may legitimately pick.

mod error;
mod question;
mod session;

pub use error::*;
pub use question::*;
pub use session::*;
