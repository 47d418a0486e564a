pub mod fruits;

pub use fruits::{FruitStore, MemoryFruitStore, PostgresFruitStore, StoreError, StoreResult};
