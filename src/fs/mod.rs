//! Filesystem layer: request-path resolution and directory listings.
//!
//! Everything here is synchronous and filesystem-only; the server layer
//! wraps calls in blocking tasks.

pub mod listing;
pub mod resolve;

pub use listing::{format_size, list_directory, sort_entries, ListingEntry, ListingResult};
pub use resolve::{resolve, ResolvedPath};
