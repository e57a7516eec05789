pub mod category_nav;
pub mod nav_arrow;

pub use category_nav::CategoryNav;
pub use nav_arrow::NavArrow;
