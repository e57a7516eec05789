pub mod category_block;
pub mod item_list;
pub mod menu_item;

pub use category_block::CategoryBlock;
pub use item_list::ItemList;
pub use menu_item::MenuItemRow;
