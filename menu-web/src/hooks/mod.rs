pub mod use_menu_context;
