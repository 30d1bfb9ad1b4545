//! Supplier Details - ViewModel

use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;

#[derive(Clone, Copy)]
pub struct SupplierDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    // Contact
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub tax_number: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub status: FormStatus,
}

impl SupplierDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            tax_number: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, supplier: Supplier) {
        self.id.set(Some(supplier.id));
        self.name.set(supplier.name);
        self.phone.set(supplier.phone.unwrap_or_default());
        self.email.set(supplier.email.unwrap_or_default());
        self.address.set(supplier.address.unwrap_or_default());
        self.tax_number.set(supplier.tax_number.unwrap_or_default());
        self.notes.set(supplier.notes.unwrap_or_default());
    }

    pub fn build_save_dto(&self) -> SupplierDto {
        SupplierDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            phone: non_blank(&self.phone.get_untracked()),
            email: non_blank(&self.email.get_untracked()),
            address: non_blank(&self.address.get_untracked()),
            tax_number: non_blank(&self.tax_number.get_untracked()),
            notes: non_blank(&self.notes.get_untracked()),
        }
    }
}

impl Default for SupplierDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
