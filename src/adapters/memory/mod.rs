//! In-memory adapters.

mod client_store;

pub use client_store::InMemoryClientStore;
