use contracts::domain::a004_unit::aggregate::{Unit, UnitDto};
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;

#[derive(Clone, Copy)]
pub struct UnitDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub symbol: RwSignal<String>,
    pub status: FormStatus,
}

impl UnitDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            symbol: RwSignal::new(String::new()),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, unit: Unit) {
        self.id.set(Some(unit.id));
        self.name.set(unit.name);
        self.symbol.set(unit.symbol);
    }

    pub fn build_save_dto(&self) -> UnitDto {
        UnitDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            symbol: self.symbol.get_untracked().trim().to_string(),
        }
    }
}

impl Default for UnitDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
