//! # agentforge-error
//!
//! Unified error handling for agentforge - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., UnsupportedModel, RateLimited)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use agentforge_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InferenceFailed, "model returned empty response")
//!         .with_operation("provider::complete")
//!         .with_context("model", "gpt-4")
//!         .with_context("framework", "langchain"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, agentforge_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using agentforge Error
pub type Result<T> = std::result::Result<T, Error>;
