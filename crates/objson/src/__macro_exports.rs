//! Re-exports for the code generated by [`objson_derive`].
//!
//! Not public API; the only guarantee is that the derive macro of the same
//! crate version can rely on it.

pub use std::sync::OnceLock;
