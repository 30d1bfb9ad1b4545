use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::ValidationErrors;

/// A stock location (warehouse, kitchen, shop floor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Default for InventoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            location: None,
            description: None,
            is_active: true,
        }
    }
}

impl ApiResource for Inventory {
    const COLLECTION: &'static str = "inventories";
    type Dto = InventoryDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_dto(&self) -> InventoryDto {
        InventoryDto {
            id: Some(self.id),
            name: self.name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }
}

impl ResourceDto for InventoryDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name);
        errors.into_result()
    }
}
