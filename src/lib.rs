pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::RemoError;
pub use crate::core::services::{RemoService, ServiceSettings};
pub use infrastructure::notifications::in_memory::InMemoryNotifier;
pub use infrastructure::storage::file::FileStore;
pub use infrastructure::storage::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
