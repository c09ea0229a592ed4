pub mod empty_state;
pub mod filter_bar;
pub mod header;
pub mod sidebar;
pub mod user_modal;
pub mod user_table;
