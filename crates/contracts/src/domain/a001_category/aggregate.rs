use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::ValidationErrors;

/// Item category; categories may nest one level under a parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

impl ApiResource for Category {
    const COLLECTION: &'static str = "categories";
    type Dto = CategoryDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id,
        }
    }
}

impl ResourceDto for CategoryDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name);
        if self.id.is_some() && self.parent_id == self.id {
            errors.add("parent_id", "validation.self_parent");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cannot_be_its_own_parent() {
        let dto = CategoryDto {
            id: Some(4),
            name: "Dairy".into(),
            description: None,
            parent_id: Some(4),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("parent_id"), Some("validation.self_parent"));
    }
}
