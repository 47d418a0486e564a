pub mod fruit_service;

pub use fruit_service::FruitService;
