pub mod a001_category;
pub mod a002_inventory;
pub mod a003_supplier;
pub mod a004_unit;
pub mod a005_currency;
pub mod a006_item;
pub mod a007_invoice;
pub mod a008_inventory_count;
