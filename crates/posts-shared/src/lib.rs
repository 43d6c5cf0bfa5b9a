//! # Posts Shared
//!
//! Wire types for the posts API and the JSON codec that reads and writes them.
//! Both the server and any Rust client can depend on this crate.

pub mod codec;
pub mod dto;

pub use codec::CodecError;
pub use dto::{AuthorDto, PostRequest, PostResponse};
