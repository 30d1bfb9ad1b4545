use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::a005_currency::aggregate::Currency;
use contracts::domain::a006_item::aggregate::Item;
use contracts::domain::a007_invoice::aggregate::Invoice;
use contracts::domain::a008_inventory_count::aggregate::InventoryCount;
use contracts::domain::ApiResource;
use contracts::reports::r101_supplier_transactions::SupplierTransaction;
use contracts::reports::r102_cost_analysis::CostAnalysisRow;
use contracts::reports::r103_item_movements::ItemMovement;
use contracts::reports::r104_stock_balance::StockBalanceRow;

/// A row the generic table can key, sort by default and name in prompts.
pub trait TableRecord: Clone + Send + Sync + 'static {
    fn record_id(&self) -> i64;

    fn record_label(&self) -> String {
        format!("#{}", self.record_id())
    }
}

macro_rules! table_record_for_resource {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TableRecord for $ty {
                fn record_id(&self) -> i64 {
                    ApiResource::id(self)
                }

                fn record_label(&self) -> String {
                    self.display_name()
                }
            }
        )*
    };
}

table_record_for_resource!(
    Category,
    Inventory,
    Supplier,
    Unit,
    Currency,
    Item,
    InventoryCount,
);

impl TableRecord for Invoice {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn record_label(&self) -> String {
        self.number
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

impl TableRecord for SupplierTransaction {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl TableRecord for CostAnalysisRow {
    fn record_id(&self) -> i64 {
        self.item_id
    }
}

impl TableRecord for ItemMovement {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl TableRecord for StockBalanceRow {
    fn record_id(&self) -> i64 {
        self.item_id
    }
}
