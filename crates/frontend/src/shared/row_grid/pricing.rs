//! Item → unit → price cascades shared by the invoice and item editors.

use std::collections::HashMap;
use std::sync::Arc;

use contracts::domain::a006_item::aggregate::{preferred_unit, ItemUnit};
use contracts::domain::a006_item::pricing::ItemPrice;
use leptos::prelude::*;

use crate::shared::api::client::get_data;
use crate::shared::api::ApiError;
use crate::shared::format::round4;

/// Units per item id, filled lazily as items get picked on grid lines.
#[derive(Debug, Clone, Default)]
pub struct UnitCache {
    units: HashMap<i64, Arc<Vec<ItemUnit>>>,
}

impl UnitCache {
    pub fn get(&self, item_id: i64) -> Option<Arc<Vec<ItemUnit>>> {
        self.units.get(&item_id).cloned()
    }

    pub fn contains(&self, item_id: i64) -> bool {
        self.units.contains_key(&item_id)
    }

    pub fn insert(&mut self, item_id: i64, units: Vec<ItemUnit>) -> Arc<Vec<ItemUnit>> {
        let units = Arc::new(units);
        self.units.insert(item_id, units.clone());
        units
    }

    pub fn unit(&self, item_id: i64, unit_id: i64) -> Option<ItemUnit> {
        self.units
            .get(&item_id)
            .and_then(|units| units.iter().find(|u| u.unit_id == unit_id).cloned())
    }
}

/// Base price of every item in its primary unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<i64, f64>,
}

impl PriceTable {
    pub fn from_prices(prices: impl IntoIterator<Item = ItemPrice>) -> Self {
        Self {
            prices: prices.into_iter().map(|p| (p.item_id, p.price)).collect(),
        }
    }

    pub fn base_price(&self, item_id: i64) -> Option<f64> {
        self.prices.get(&item_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Price of one `unit` of `item_id`. An explicit unit price wins over the
/// base price scaled by the conversion factor.
pub fn unit_price(prices: &PriceTable, item_id: i64, unit: &ItemUnit) -> Option<f64> {
    unit.price
        .or_else(|| {
            prices
                .base_price(item_id)
                .map(|base| base * unit.conversion_factor)
        })
        .map(round4)
}

pub fn line_total(quantity: f64, price: f64) -> f64 {
    round4(quantity * price)
}

pub fn grand_total(lines: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    round4(lines.into_iter().map(|(qty, price)| qty * price).sum())
}

/// Unit preselected when an item is picked, and its derived price.
pub fn unit_selection(
    prices: &PriceTable,
    item_id: i64,
    units: &[ItemUnit],
) -> Option<(ItemUnit, Option<f64>)> {
    preferred_unit(units).map(|unit| (unit.clone(), unit_price(prices, item_id, unit)))
}

/// Reactive holder of the unit cache and price table for one editor.
#[derive(Clone, Copy)]
pub struct PricingStore {
    units: RwSignal<UnitCache>,
    prices: RwSignal<PriceTable>,
}

impl Default for PricingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingStore {
    pub fn new() -> Self {
        Self {
            units: RwSignal::new(UnitCache::default()),
            prices: RwSignal::new(PriceTable::default()),
        }
    }

    /// Fetches `GET /items/prices` once per store.
    pub async fn load_prices(&self) -> Result<(), ApiError> {
        if !self.prices.with_untracked(PriceTable::is_empty) {
            return Ok(());
        }
        let prices: Vec<ItemPrice> = get_data("/items/prices").await?;
        log::debug!("price table loaded: {} items", prices.len());
        self.prices.set(PriceTable::from_prices(prices));
        Ok(())
    }

    /// Units of `item_id`, from the cache or `GET /items/{id}/units`.
    pub async fn units_for(&self, item_id: i64) -> Result<Arc<Vec<ItemUnit>>, ApiError> {
        if let Some(units) = self.units.with_untracked(|c| c.get(item_id)) {
            log::debug!("unit cache hit: item {item_id}");
            return Ok(units);
        }
        let units: Vec<ItemUnit> = get_data(&format!("/items/{item_id}/units")).await?;
        let mut stored = Arc::new(Vec::new());
        self.units.update(|c| stored = c.insert(item_id, units));
        Ok(stored)
    }

    /// Units already cached for `item_id`; reactive.
    pub fn cached_units(&self, item_id: i64) -> Vec<ItemUnit> {
        self.units
            .with(|c| c.get(item_id))
            .map(|u| u.as_ref().clone())
            .unwrap_or_default()
    }

    /// `(unit_id, label)` choices for a line holding `item_id`; reactive.
    /// Units the backend sent without a name are labelled by `fallback`.
    pub fn unit_options(&self, item_id: i64, fallback: impl Fn(i64) -> String) -> Vec<(i64, String)> {
        self.cached_units(item_id)
            .into_iter()
            .map(|u| {
                let label = u.unit_name.unwrap_or_else(|| fallback(u.unit_id));
                (u.unit_id, label)
            })
            .collect()
    }

    pub fn price_of(&self, item_id: i64, unit_id: i64) -> Option<f64> {
        let unit = self.units.with_untracked(|c| c.unit(item_id, unit_id))?;
        self.prices
            .with_untracked(|p| unit_price(p, item_id, &unit))
    }

    pub fn select_item(&self, item_id: i64) -> Option<(ItemUnit, Option<f64>)> {
        let units = self.units.with_untracked(|c| c.get(item_id))?;
        self.prices
            .with_untracked(|p| unit_selection(p, item_id, &units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(unit_id: i64, factor: f64, primary: bool, default: bool) -> ItemUnit {
        ItemUnit {
            unit_id,
            unit_name: None,
            conversion_factor: factor,
            is_primary: primary,
            is_default: default,
            price: None,
        }
    }

    fn table() -> PriceTable {
        PriceTable::from_prices(vec![
            ItemPrice {
                item_id: 1,
                price: 2.5,
            },
            ItemPrice {
                item_id: 2,
                price: 0.33331,
            },
        ])
    }

    #[test]
    fn unit_price_scales_base_price() {
        let box_of_12 = unit(2, 12.0, false, false);
        assert_eq!(unit_price(&table(), 1, &box_of_12), Some(30.0));
    }

    #[test]
    fn unit_price_rounds_to_four_decimals() {
        let triple = unit(3, 3.0, false, false);
        assert_eq!(unit_price(&table(), 2, &triple), Some(0.9999));
    }

    #[test]
    fn explicit_unit_price_wins() {
        let mut crate_unit = unit(4, 24.0, false, false);
        crate_unit.price = Some(55.0);
        assert_eq!(unit_price(&table(), 1, &crate_unit), Some(55.0));
    }

    #[test]
    fn unknown_item_has_no_price() {
        assert_eq!(unit_price(&table(), 99, &unit(1, 1.0, true, false)), None);
    }

    #[test]
    fn selection_prefers_default_then_primary() {
        let units = vec![
            unit(1, 1.0, true, false),
            unit(2, 12.0, false, true),
        ];
        let (picked, price) = unit_selection(&table(), 1, &units).unwrap();
        assert_eq!(picked.unit_id, 2);
        assert_eq!(price, Some(30.0));

        let no_default = vec![unit(5, 6.0, false, false), unit(1, 1.0, true, false)];
        let (picked, _) = unit_selection(&table(), 1, &no_default).unwrap();
        assert_eq!(picked.unit_id, 1);

        assert!(unit_selection(&table(), 1, &[]).is_none());
    }

    #[test]
    fn cache_hands_back_the_same_units() {
        let mut cache = UnitCache::default();
        assert!(!cache.contains(7));
        let stored = cache.insert(7, vec![unit(1, 1.0, true, true)]);
        let again = cache.get(7).unwrap();
        assert!(Arc::ptr_eq(&stored, &again));
        assert_eq!(cache.unit(7, 1).map(|u| u.unit_id), Some(1));
        assert!(cache.unit(7, 2).is_none());
    }

    #[test]
    fn totals() {
        assert_eq!(line_total(3.0, 2.5), 7.5);
        assert_eq!(grand_total(vec![(3.0, 2.5), (2.0, 1.25)]), 10.0);
        assert_eq!(grand_total(Vec::new()), 0.0);
    }
}
