//! Curl-style URL glob expansion.
//!
//! Expands a templated string containing brace lists (`{a,b,c}`) and bracket
//! ranges (`[1-10]`, `[01-10:3]`, `[a-z]`, `[a-z:3]`) into every concrete
//! string it denotes.
//!
//! # Overview
//!
//! - **Brace lists**: comma-separated literal alternatives. Empty alternatives
//!   substitute nothing.
//! - **Numeric ranges**: inclusive, optional step, zero-padded to the width of
//!   the start bound.
//! - **Alpha ranges**: inclusive single-character ranges of at most 26
//!   characters, optional step.
//!
//! Anything else, including malformed groups, is literal text.
//!
//! # Example
//!
//! ```
//! use urlglob::expand;
//!
//! let urls: Vec<String> = expand("https://example.com?page=[01-10:3]")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(
//!     urls,
//!     vec![
//!         "https://example.com?page=01",
//!         "https://example.com?page=04",
//!         "https://example.com?page=07",
//!         "https://example.com?page=10",
//!     ]
//! );
//! ```
//!
//! # Modules
//!
//! - [`error`]: Range error type
//! - [`pattern`]: Glob group recognition and substitution values
//! - [`expand`](mod@expand): The lazy expansion iterator
//! - [`request`]: Start-request expansion for crawlers

pub mod error;
pub mod expand;
pub mod pattern;
pub mod request;

pub use error::{GlobError, GlobResult};
pub use expand::{expand, expand_to_vec, Expansion};
pub use pattern::{find_first_group, AlphaRange, GlobGroup, GlobMatch, NumericRange};
pub use request::{
    expand_requests, expand_start_urls, ExpandStartUrls, Request, StartRequests, WorkItem,
};
