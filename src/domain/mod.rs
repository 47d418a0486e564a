pub mod fruit;

pub use fruit::{coerce_checkbox, Fruit, FruitForm, FruitId, FruitInput};
