// Application layer - shared error type for everything outside the pure
// conversion core.

pub mod error;

pub use error::*;
