//! The `Fruit` entity and the form types that feed it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::storage::StoreError;

/// Store-assigned identifier of a fruit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitId(Uuid);

impl FruitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FruitId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FruitId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for FruitId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::InvalidIdentifier(s.to_string()))
    }
}

/// A stored fruit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Fruit {
    #[schema(value_type = String)]
    pub id: FruitId,
    #[serde(rename = "fruitName")]
    pub fruit_name: Option<String>,
    #[serde(rename = "isReadyToEat")]
    pub is_ready_to_eat: bool,
}

impl Fruit {
    pub fn new(id: FruitId, input: FruitInput) -> Self {
        Self {
            id,
            fruit_name: input.fruit_name,
            is_ready_to_eat: input.is_ready_to_eat,
        }
    }

    /// Applies an update: the flag is always set, the name only when supplied.
    pub fn apply(&mut self, input: FruitInput) {
        if let Some(name) = input.fruit_name {
            self.fruit_name = Some(name);
        }
        self.is_ready_to_eat = input.is_ready_to_eat;
    }
}

/// Raw form body as posted by the create/edit pages.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct FruitForm {
    #[serde(rename = "fruitName", default)]
    pub fruit_name: Option<String>,
    /// `"on"` when the checkbox is ticked; browsers omit unchecked boxes.
    #[serde(rename = "isReadyToEat", default)]
    pub is_ready_to_eat: Option<String>,
}

impl FruitForm {
    pub const FRUIT_NAME_FIELD: &'static str = "fruitName";
    pub const READY_TO_EAT_FIELD: &'static str = "isReadyToEat";

    /// Decodes a urlencoded body without rejecting anything.
    ///
    /// An undecodable body yields the empty form.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .map(Self::from_pairs)
            .unwrap_or_default()
    }

    /// The first `fruitName` wins. A repeated `isReadyToEat` is kept joined,
    /// so it never equals `"on"` and coerces to unchecked.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut fruit_name = None;
        let mut checkbox: Vec<String> = Vec::new();
        for (key, value) in pairs {
            if key == Self::FRUIT_NAME_FIELD {
                fruit_name.get_or_insert(value);
            } else if key == Self::READY_TO_EAT_FIELD {
                checkbox.push(value);
            }
        }
        let is_ready_to_eat = match checkbox.len() {
            0 => None,
            1 => checkbox.pop(),
            _ => Some(checkbox.join(",")),
        };
        Self {
            fruit_name,
            is_ready_to_eat,
        }
    }

    pub fn into_input(self) -> FruitInput {
        FruitInput {
            fruit_name: self.fruit_name,
            is_ready_to_eat: coerce_checkbox(self.is_ready_to_eat.as_deref()),
        }
    }
}

/// Coerced input handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitInput {
    pub fruit_name: Option<String>,
    pub is_ready_to_eat: bool,
}

/// Only the exact string `"on"` counts as checked.
pub fn coerce_checkbox(value: Option<&str>) -> bool {
    matches!(value, Some("on"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_on_is_true() {
        assert!(coerce_checkbox(Some("on")));
    }

    #[test]
    fn checkbox_other_values_are_false() {
        assert!(!coerce_checkbox(None));
        assert!(!coerce_checkbox(Some("")));
        assert!(!coerce_checkbox(Some("ON")));
        assert!(!coerce_checkbox(Some("true")));
        assert!(!coerce_checkbox(Some(" on")));
    }

    #[test]
    fn form_without_checkbox_coerces_to_false() {
        let form = FruitForm {
            fruit_name: Some("Lime".to_string()),
            is_ready_to_eat: None,
        };
        let input = form.into_input();
        assert_eq!(input.fruit_name.as_deref(), Some("Lime"));
        assert!(!input.is_ready_to_eat);
    }

    #[test]
    fn urlencoded_checked_box_is_true() {
        let input = FruitForm::from_urlencoded(b"fruitName=Mango&isReadyToEat=on").into_input();
        assert_eq!(input.fruit_name.as_deref(), Some("Mango"));
        assert!(input.is_ready_to_eat);
    }

    #[test]
    fn repeated_checkbox_coerces_to_false() {
        let input =
            FruitForm::from_urlencoded(b"fruitName=Fig&isReadyToEat=on&isReadyToEat=on").into_input();
        assert_eq!(input.fruit_name.as_deref(), Some("Fig"));
        assert!(!input.is_ready_to_eat);
    }

    #[test]
    fn unrelated_or_empty_body_is_empty_form() {
        let input = FruitForm::from_urlencoded(br#"{"fruitName":"Fig"}"#).into_input();
        assert_eq!(input.fruit_name, None);
        assert!(!input.is_ready_to_eat);

        let input = FruitForm::from_urlencoded(b"").into_input();
        assert_eq!(input.fruit_name, None);
        assert!(!input.is_ready_to_eat);
    }

    #[test]
    fn padded_id_is_invalid_identifier() {
        let padded = format!(" {}", FruitId::new());
        assert!(matches!(
            padded.parse::<FruitId>(),
            Err(StoreError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn fruit_id_parses_its_own_display() {
        let id = FruitId::new();
        let parsed: FruitId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_id_is_invalid_identifier() {
        let err = "not-an-id".parse::<FruitId>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidIdentifier(s) if s == "not-an-id"));
    }

    #[test]
    fn apply_keeps_name_when_absent() {
        let mut fruit = Fruit::new(
            FruitId::new(),
            FruitInput {
                fruit_name: Some("Mango".to_string()),
                is_ready_to_eat: true,
            },
        );
        let id = fruit.id;
        fruit.apply(FruitInput {
            fruit_name: None,
            is_ready_to_eat: false,
        });
        assert_eq!(fruit.id, id);
        assert_eq!(fruit.fruit_name.as_deref(), Some("Mango"));
        assert!(!fruit.is_ready_to_eat);
    }

    #[test]
    fn fruit_serializes_with_wire_names() {
        let fruit = Fruit::new(
            FruitId::new(),
            FruitInput {
                fruit_name: Some("Mango".to_string()),
                is_ready_to_eat: true,
            },
        );
        let json = serde_json::to_value(&fruit).unwrap();
        assert_eq!(json["fruitName"], "Mango");
        assert_eq!(json["isReadyToEat"], true);
        assert_eq!(json["id"], fruit.id.to_string());
    }
}
