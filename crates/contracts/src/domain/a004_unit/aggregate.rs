use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::ValidationErrors;

/// Unit of measure (kg, g, box, piece).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub symbol: String,
}

impl ApiResource for Unit {
    const COLLECTION: &'static str = "units";
    type Dto = UnitDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        if self.symbol.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.symbol)
        }
    }

    fn to_dto(&self) -> UnitDto {
        UnitDto {
            id: Some(self.id),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }
}

impl ResourceDto for UnitDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name);
        errors.require_text("symbol", &self.symbol);
        errors.into_result()
    }
}
