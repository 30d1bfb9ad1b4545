//! Inventory Details - ViewModel

use contracts::domain::a002_inventory::aggregate::{Inventory, InventoryDto};
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;

#[derive(Clone, Copy)]
pub struct InventoryDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub location: RwSignal<String>,
    pub description: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub status: FormStatus,
}

impl InventoryDetailsVm {
    /// New stores start active.
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            is_active: RwSignal::new(true),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, inventory: Inventory) {
        self.id.set(Some(inventory.id));
        self.name.set(inventory.name);
        self.location.set(inventory.location.unwrap_or_default());
        self.description.set(inventory.description.unwrap_or_default());
        self.is_active.set(inventory.is_active);
    }

    pub fn build_save_dto(&self) -> InventoryDto {
        InventoryDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            location: non_blank(&self.location.get_untracked()),
            description: non_blank(&self.description.get_untracked()),
            is_active: self.is_active.get_untracked(),
        }
    }
}

impl Default for InventoryDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
