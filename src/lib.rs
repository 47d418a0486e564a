pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;
pub mod views;

// Convenience re-exports (keeps call-sites clean)
pub use app::FruitService;
pub use domain::{Fruit, FruitForm, FruitId, FruitInput};
pub use infra::config;
pub use storage::{FruitStore, MemoryFruitStore, PostgresFruitStore, StoreError};
