pub mod date_window;
pub mod item_count;
