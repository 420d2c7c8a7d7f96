//! Simulated asynchronous user store.
//!
//! Holds its own collection, independent of any view-model, and resolves
//! every call after a fixed latency.

mod error;
mod latency;
mod user_store;

pub use error::{Result, StoreError};
pub use latency::StoreLatency;
pub use user_store::UserStore;
