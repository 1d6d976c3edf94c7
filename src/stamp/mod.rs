//! Stamping helper support
//!
//! Some projects record the release version in more places than the JSON
//! manifest. A configured helper program runs after the manifest is written
//! and before anything is staged, with the version in its arguments and
//! environment.

pub mod context;
pub mod executor;

pub use context::StampContext;
pub use executor::StampExecutor;
