//! Document sources: the built-in seeded dataset and read-only JSON datasets.

mod error;
pub use error::StoreError;

mod json;
pub use json::JsonSource;

mod memory;
pub use memory::InMemorySource;
