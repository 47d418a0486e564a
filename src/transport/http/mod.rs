pub mod errors;
pub mod middleware;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod fruits;
    pub mod health;
    pub mod home;
}

pub use errors::AppError;
pub use router::{create_router, with_method_override, ApiDoc, App};
pub use types::AppState;
