use crate::app::FruitService;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub fruit_service: FruitService,
}

impl AppState {
    pub fn new(fruit_service: FruitService) -> Self {
        Self { fruit_service }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query string read by the method override layer.
#[derive(Deserialize, Debug, Default)]
pub struct MethodOverrideQuery {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,
}
