//! Category Details - ViewModel

use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;

#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub parent_id: RwSignal<Option<i64>>,
    pub status: FormStatus,
}

impl CategoryDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            parent_id: RwSignal::new(None),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, category: Category) {
        self.id.set(Some(category.id));
        self.name.set(category.name);
        self.description.set(category.description.unwrap_or_default());
        self.parent_id.set(category.parent_id);
    }

    pub fn build_save_dto(&self) -> CategoryDto {
        CategoryDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            description: non_blank(&self.description.get_untracked()),
            parent_id: self.parent_id.get_untracked(),
        }
    }
}

impl Default for CategoryDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
