pub mod date_input;
pub mod date_range_picker;
pub mod details_form;
pub mod entity_select;
pub mod form_field;
pub mod page_header;
pub mod pagination_controls;
pub mod totals_bar;
pub mod ui;
