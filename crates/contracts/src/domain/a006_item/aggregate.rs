use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::validation::{line_field, MSG_POSITIVE, MSG_REQUIRED};
use crate::shared::ValidationErrors;

pub const MSG_NO_UNITS: &str = "validation.item.no_units";
pub const MSG_ONE_PRIMARY: &str = "validation.item.one_primary_unit";
pub const MSG_ONE_DEFAULT: &str = "validation.item.one_default_unit";
pub const MSG_PRIMARY_FACTOR: &str = "validation.item.primary_factor";
pub const MSG_DUPLICATE_UNIT: &str = "validation.item.duplicate_unit";
pub const MSG_NO_INGREDIENTS: &str = "validation.item.no_ingredients";
pub const MSG_SELF_INGREDIENT: &str = "validation.item.self_ingredient";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Purchased and consumed as-is.
    #[default]
    Raw,
    /// Manufactured from ingredients.
    Produced,
    /// Sold but never stocked.
    Serviceable,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Raw, ItemType::Produced, ItemType::Serviceable];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Raw => "raw",
            ItemType::Produced => "produced",
            ItemType::Serviceable => "serviceable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ItemType::Raw => "item.type.raw",
            ItemType::Produced => "item.type.produced",
            ItemType::Serviceable => "item.type.serviceable",
        }
    }

    pub fn has_ingredients(&self) -> bool {
        matches!(self, ItemType::Produced)
    }
}

/// A unit the item can be counted in, relative to its primary unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUnit {
    pub unit_id: i64,
    #[serde(default)]
    pub unit_name: Option<String>,
    /// How many primary units one of this unit holds.
    pub conversion_factor: f64,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_default: bool,
    /// Explicit price for this unit; overrides the derived one when set.
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: i64,
    #[serde(default)]
    pub item_name: Option<String>,
    pub unit_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub units: Vec<ItemUnit>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Item {
    pub fn primary_unit(&self) -> Option<&ItemUnit> {
        self.units.iter().find(|u| u.is_primary)
    }

    pub fn default_unit(&self) -> Option<&ItemUnit> {
        preferred_unit(&self.units)
    }
}

/// Unit preselected on a fresh line: default, else primary, else first.
pub fn preferred_unit(units: &[ItemUnit]) -> Option<&ItemUnit> {
    units
        .iter()
        .find(|u| u.is_default)
        .or_else(|| units.iter().find(|u| u.is_primary))
        .or_else(|| units.first())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub units: Vec<ItemUnit>,
    pub ingredients: Vec<Ingredient>,
    pub price: Option<f64>,
}

impl ApiResource for Item {
    const COLLECTION: &'static str = "items";
    type Dto = ItemDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.code, self.name)
        }
    }

    fn to_dto(&self) -> ItemDto {
        ItemDto {
            id: Some(self.id),
            code: self.code.clone(),
            name: self.name.clone(),
            item_type: self.item_type,
            category_id: self.category_id,
            description: self.description.clone(),
            units: self.units.clone(),
            ingredients: self.ingredients.clone(),
            price: self.price,
        }
    }
}

impl ResourceDto for ItemDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("code", &self.code);
        errors.require_text("name", &self.name);
        if let Err(unit_errors) = validate_units(&self.units) {
            for (field, key) in unit_errors.iter() {
                errors.add(field, key);
            }
        }
        if self.item_type.has_ingredients() {
            if let Err(ingredient_errors) = validate_ingredients(self.id, &self.ingredients) {
                for (field, key) in ingredient_errors.iter() {
                    errors.add(field, key);
                }
            }
        }
        errors.into_result()
    }
}

/// Exactly one primary unit (factor 1), exactly one default unit, positive
/// factors, no unit listed twice.
pub fn validate_units(units: &[ItemUnit]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if units.is_empty() {
        errors.add("units", MSG_NO_UNITS);
        return errors.into_result();
    }

    let primaries: Vec<&ItemUnit> = units.iter().filter(|u| u.is_primary).collect();
    if primaries.len() != 1 {
        errors.add("units", MSG_ONE_PRIMARY);
    } else if (primaries[0].conversion_factor - 1.0).abs() > f64::EPSILON {
        errors.add("units", MSG_PRIMARY_FACTOR);
    }
    if units.iter().filter(|u| u.is_default).count() != 1 {
        errors.add("units.default", MSG_ONE_DEFAULT);
    }

    for (index, unit) in units.iter().enumerate() {
        if unit.unit_id <= 0 {
            errors.add(line_field("units", index, "unit_id"), MSG_REQUIRED);
        } else if units[..index].iter().any(|u| u.unit_id == unit.unit_id) {
            errors.add(line_field("units", index, "unit_id"), MSG_DUPLICATE_UNIT);
        }
        if !(unit.conversion_factor > 0.0) {
            errors.add(line_field("units", index, "conversion_factor"), MSG_POSITIVE);
        }
    }
    errors.into_result()
}

pub fn validate_ingredients(
    item_id: Option<i64>,
    ingredients: &[Ingredient],
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if ingredients.is_empty() {
        errors.add("ingredients", MSG_NO_INGREDIENTS);
    }
    for (index, ingredient) in ingredients.iter().enumerate() {
        if ingredient.item_id <= 0 {
            errors.add(line_field("ingredients", index, "item_id"), MSG_REQUIRED);
        } else if Some(ingredient.item_id) == item_id {
            errors.add(line_field("ingredients", index, "item_id"), MSG_SELF_INGREDIENT);
        }
        if ingredient.unit_id <= 0 {
            errors.add(line_field("ingredients", index, "unit_id"), MSG_REQUIRED);
        }
        if !(ingredient.quantity > 0.0) {
            errors.add(line_field("ingredients", index, "quantity"), MSG_POSITIVE);
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(unit_id: i64, factor: f64, is_primary: bool, is_default: bool) -> ItemUnit {
        ItemUnit {
            unit_id,
            unit_name: None,
            conversion_factor: factor,
            is_primary,
            is_default,
            price: None,
        }
    }

    #[test]
    fn units_need_exactly_one_primary_and_one_default() {
        assert!(validate_units(&[unit(1, 1.0, true, true), unit(2, 12.0, false, false)]).is_ok());

        let two_primaries =
            validate_units(&[unit(1, 1.0, true, true), unit(2, 1.0, true, false)]).unwrap_err();
        assert_eq!(two_primaries.get("units"), Some(MSG_ONE_PRIMARY));

        let no_default =
            validate_units(&[unit(1, 1.0, true, false), unit(2, 6.0, false, false)]).unwrap_err();
        assert_eq!(no_default.get("units.default"), Some(MSG_ONE_DEFAULT));
        assert!(no_default.get("units").is_none());
    }

    #[test]
    fn primary_unit_factor_must_be_one() {
        let errors = validate_units(&[unit(1, 2.0, true, true)]).unwrap_err();
        assert_eq!(errors.get("units"), Some(MSG_PRIMARY_FACTOR));
    }

    #[test]
    fn duplicate_and_non_positive_units_are_flagged_per_line() {
        let errors = validate_units(&[
            unit(1, 1.0, true, true),
            unit(1, 5.0, false, false),
            unit(3, 0.0, false, false),
        ])
        .unwrap_err();
        assert_eq!(errors.get("units.1.unit_id"), Some(MSG_DUPLICATE_UNIT));
        assert_eq!(errors.get("units.2.conversion_factor"), Some(MSG_POSITIVE));
    }

    #[test]
    fn produced_item_needs_ingredients_but_raw_does_not() {
        let mut dto = ItemDto {
            code: "BRD".into(),
            name: "Bread".into(),
            item_type: ItemType::Produced,
            units: vec![unit(1, 1.0, true, true)],
            ..ItemDto::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("ingredients"),
            Some(MSG_NO_INGREDIENTS)
        );

        dto.item_type = ItemType::Raw;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn item_cannot_contain_itself() {
        let ingredients = vec![Ingredient {
            item_id: 9,
            item_name: None,
            unit_id: 1,
            quantity: 2.0,
            unit_cost: None,
            total_cost: None,
        }];
        let errors = validate_ingredients(Some(9), &ingredients).unwrap_err();
        assert_eq!(
            errors.get("ingredients.0.item_id"),
            Some(MSG_SELF_INGREDIENT)
        );
    }

    #[test]
    fn preferred_unit_falls_back_to_primary_then_first() {
        let units = vec![unit(5, 10.0, false, false), unit(7, 1.0, true, false)];
        assert_eq!(preferred_unit(&units).map(|u| u.unit_id), Some(7));
        let units = vec![unit(5, 10.0, false, false)];
        assert_eq!(preferred_unit(&units).map(|u| u.unit_id), Some(5));
    }

    #[test]
    fn item_type_travels_as_type_field() {
        let item: Item = serde_json::from_str(
            r#"{"id":3,"code":"FL","name":"Flour","type":"raw","units":[{"unit_id":1,"conversion_factor":1,"is_primary":true,"is_default":true}]}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, ItemType::Raw);
        assert_eq!(item.primary_unit().map(|u| u.unit_id), Some(1));
    }
}
