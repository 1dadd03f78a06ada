//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod console;
mod provider;
mod store;

pub use console::Console;
pub use provider::{ProviderError, RateProvider};
pub use store::{OutputStore, StoreError};
