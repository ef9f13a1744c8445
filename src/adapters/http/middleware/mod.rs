//! HTTP middleware for axum.
//!
//! - `post_only` - Rejects non-POST requests on the Apple Pay endpoints

pub mod post_only;

pub use post_only::{require_post, INVALID_POST_MESSAGE};
