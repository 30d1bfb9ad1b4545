//! Item Details - ViewModel
//!
//! Grid rows keep raw input text; conversion to wire types happens once,
//! when the form is saved or priced.

use contracts::domain::a006_item::aggregate::{Ingredient, Item, ItemDto, ItemType, ItemUnit};
use contracts::domain::a006_item::pricing::{PricingLine, PricingRequest, PricingResponse};
use contracts::domain::non_blank;
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::form_utils::FormStatus;
use crate::shared::format::{parse_decimal, round4};
use crate::shared::row_grid::pricing::{grand_total, line_total};
use crate::shared::row_grid::{GridHandle, GridNavigator, LineGrid};

pub const UNIT_FIELDS: [&str; 3] = ["unit_id", "conversion_factor", "price"];
pub const INGREDIENT_FIELDS: [&str; 3] = ["item_id", "unit_id", "quantity"];

#[derive(Debug, Clone, PartialEq)]
pub struct UnitRow {
    pub unit_id: Option<i64>,
    pub factor: String,
    pub is_primary: bool,
    pub is_default: bool,
    pub price: String,
}

impl Default for UnitRow {
    fn default() -> Self {
        Self {
            unit_id: None,
            factor: "1".to_string(),
            is_primary: false,
            is_default: false,
            price: String::new(),
        }
    }
}

impl UnitRow {
    pub fn from_unit(unit: &ItemUnit) -> Self {
        Self {
            unit_id: Some(unit.unit_id),
            factor: unit.conversion_factor.to_string(),
            is_primary: unit.is_primary,
            is_default: unit.is_default,
            price: unit.price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Trailing untouched rows are dropped on save.
    pub fn is_blank(&self) -> bool {
        self.unit_id.is_none() && self.price.trim().is_empty() && !self.is_primary && !self.is_default
    }

    /// Unreadable numbers become 0 so validation reports them.
    pub fn to_item_unit(&self) -> ItemUnit {
        ItemUnit {
            unit_id: self.unit_id.unwrap_or(0),
            unit_name: None,
            conversion_factor: parse_decimal(&self.factor).unwrap_or(0.0),
            is_primary: self.is_primary,
            is_default: self.is_default,
            price: parse_decimal(&self.price),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientRow {
    pub item_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub quantity: String,
    /// Cost of one `unit_id`; local estimate until "Calculate" replaces it.
    pub unit_cost: Option<f64>,
}

impl IngredientRow {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            item_id: Some(ingredient.item_id),
            unit_id: Some(ingredient.unit_id),
            quantity: ingredient.quantity.to_string(),
            unit_cost: ingredient.unit_cost,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.item_id.is_none() && self.quantity.trim().is_empty()
    }

    pub fn quantity_value(&self) -> f64 {
        parse_decimal(&self.quantity).unwrap_or(0.0)
    }

    pub fn total_cost(&self) -> Option<f64> {
        self.unit_cost.map(|c| line_total(self.quantity_value(), c))
    }

    pub fn to_ingredient(&self) -> Ingredient {
        Ingredient {
            item_id: self.item_id.unwrap_or(0),
            item_name: None,
            unit_id: self.unit_id.unwrap_or(0),
            quantity: self.quantity_value(),
            unit_cost: self.unit_cost,
            total_cost: self.total_cost(),
        }
    }

    fn pricing_line(&self) -> Option<PricingLine> {
        Some(PricingLine {
            item_id: self.item_id?,
            unit_id: self.unit_id?,
            quantity: self.quantity_value(),
        })
    }
}

/// Σ quantity × unit cost over the rows that have a cost.
pub fn estimated_cost<'a>(rows: impl IntoIterator<Item = &'a IngredientRow>) -> f64 {
    grand_total(
        rows.into_iter()
            .filter_map(|r| r.unit_cost.map(|c| (r.quantity_value(), c))),
    )
}

/// Copies backend-computed unit costs onto the matching rows.
pub fn apply_pricing<'a>(
    rows: impl IntoIterator<Item = &'a mut IngredientRow>,
    response: &PricingResponse,
) {
    for row in rows {
        if let (Some(item_id), Some(unit_id)) = (row.item_id, row.unit_id) {
            if let Some(priced) = response.cost_for(item_id, unit_id) {
                row.unit_cost = Some(round4(priced.unit_cost));
            }
        }
    }
}

/// Makes `target` the only row flagged by `flag`. The primary unit is the
/// reference unit, so its factor is forced to 1.
pub fn mark_unit(grid: &mut LineGrid<UnitRow>, target: Uuid, primary: bool) {
    let Some(target_index) = grid.index_of(target) else {
        return;
    };
    for (index, row) in grid.rows_mut().enumerate() {
        let selected = index == target_index;
        if primary {
            row.is_primary = selected;
            if selected {
                row.factor = "1".to_string();
            }
        } else {
            row.is_default = selected;
        }
    }
}

#[derive(Clone, Copy)]
pub struct ItemDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub item_type: RwSignal<ItemType>,
    pub category_id: RwSignal<Option<i64>>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub units: GridHandle<UnitRow>,
    pub ingredients: GridHandle<IngredientRow>,
    /// Total from the last server calculation; cleared on any ingredient edit.
    pub calculated_cost: RwSignal<Option<f64>>,
    pub calculating: RwSignal<bool>,
    pub status: FormStatus,
}

impl ItemDetailsVm {
    pub fn new() -> Self {
        let mut units = LineGrid::<UnitRow>::new();
        units.update(0, |row| {
            row.is_primary = true;
            row.is_default = true;
        });
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            item_type: RwSignal::new(ItemType::Raw),
            category_id: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            units: GridHandle::new(units, GridNavigator::new("item-units", UNIT_FIELDS.to_vec())),
            ingredients: GridHandle::new(
                LineGrid::new(),
                GridNavigator::new("item-ingredients", INGREDIENT_FIELDS.to_vec()),
            ),
            calculated_cost: RwSignal::new(None),
            calculating: RwSignal::new(false),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, item: Item) {
        self.id.set(Some(item.id));
        self.code.set(item.code);
        self.name.set(item.name);
        self.item_type.set(item.item_type);
        self.category_id.set(item.category_id);
        self.description.set(item.description.unwrap_or_default());
        self.price.set(item.price.map(|p| p.to_string()).unwrap_or_default());
        self.units.replace(item.units.iter().map(UnitRow::from_unit).collect());
        self.ingredients
            .replace(item.ingredients.iter().map(IngredientRow::from_ingredient).collect());
        self.calculated_cost.set(item.cost);
    }

    /// Live cost: the server figure when fresh, else the local estimate.
    pub fn cost(&self) -> f64 {
        self.calculated_cost
            .get()
            .unwrap_or_else(|| self.ingredients.lines.with(|g| estimated_cost(g.rows())))
    }

    pub fn pricing_request(&self) -> PricingRequest {
        PricingRequest {
            item_id: self.id.get_untracked(),
            ingredients: self
                .ingredients
                .rows()
                .iter()
                .filter_map(IngredientRow::pricing_line)
                .collect(),
        }
    }

    pub fn apply_pricing(&self, response: &PricingResponse) {
        self.ingredients
            .lines
            .update(|g| apply_pricing(g.rows_mut(), response));
        self.calculated_cost.set(Some(round4(response.total_cost)));
    }

    pub fn build_save_dto(&self) -> ItemDto {
        let item_type = self.item_type.get_untracked();
        let ingredients = if item_type.has_ingredients() {
            self.ingredients
                .filled_rows(IngredientRow::is_blank)
                .iter()
                .map(IngredientRow::to_ingredient)
                .collect()
        } else {
            Vec::new()
        };
        ItemDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked().trim().to_string(),
            name: self.name.get_untracked().trim().to_string(),
            item_type,
            category_id: self.category_id.get_untracked(),
            description: non_blank(&self.description.get_untracked()),
            units: self
                .units
                .filled_rows(UnitRow::is_blank)
                .iter()
                .map(UnitRow::to_item_unit)
                .collect(),
            ingredients,
            price: parse_decimal(&self.price.get_untracked()),
        }
    }
}

impl Default for ItemDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_item::pricing::PricedIngredient;

    fn ingredient(item_id: i64, quantity: &str, unit_cost: Option<f64>) -> IngredientRow {
        IngredientRow {
            item_id: Some(item_id),
            unit_id: Some(1),
            quantity: quantity.to_string(),
            unit_cost,
        }
    }

    #[test]
    fn blank_rows_are_recognised() {
        assert!(UnitRow::default().is_blank());
        assert!(IngredientRow::default().is_blank());
        let flagged = UnitRow {
            is_primary: true,
            ..UnitRow::default()
        };
        assert!(!flagged.is_blank());
    }

    #[test]
    fn unreadable_factor_becomes_zero() {
        let row = UnitRow {
            unit_id: Some(3),
            factor: "abc".into(),
            ..UnitRow::default()
        };
        let unit = row.to_item_unit();
        assert_eq!(unit.conversion_factor, 0.0);
        assert_eq!(unit.price, None);
    }

    #[test]
    fn estimate_skips_rows_without_cost() {
        let rows = vec![
            ingredient(1, "2", Some(1.5)),
            ingredient(2, "0.5", Some(4.0)),
            ingredient(3, "7", None),
        ];
        assert_eq!(estimated_cost(&rows), 5.0);
        assert_eq!(rows[0].total_cost(), Some(3.0));
        assert_eq!(rows[2].total_cost(), None);
    }

    #[test]
    fn server_costs_replace_local_ones() {
        let mut rows = vec![ingredient(1, "2", Some(1.5)), ingredient(2, "1", None)];
        let response = PricingResponse {
            ingredients: vec![PricedIngredient {
                item_id: 2,
                unit_id: 1,
                quantity: 1.0,
                unit_cost: 2.25,
                total_cost: 2.25,
            }],
            total_cost: 5.25,
        };
        apply_pricing(&mut rows, &response);
        assert_eq!(rows[0].unit_cost, Some(1.5));
        assert_eq!(rows[1].unit_cost, Some(2.25));
    }

    #[test]
    fn marking_primary_is_exclusive_and_resets_factor() {
        let mut grid = LineGrid::from_rows(vec![
            UnitRow {
                unit_id: Some(1),
                is_primary: true,
                ..UnitRow::default()
            },
            UnitRow {
                unit_id: Some(2),
                factor: "12".into(),
                ..UnitRow::default()
            },
        ]);
        let second = grid.lines()[1].key;
        mark_unit(&mut grid, second, true);
        let rows: Vec<UnitRow> = grid.rows().cloned().collect();
        assert!(!rows[0].is_primary);
        assert!(rows[1].is_primary);
        assert_eq!(rows[1].factor, "1");

        mark_unit(&mut grid, second, false);
        assert!(grid.get(1).map(|r| r.is_default).unwrap_or(false));
    }
}
