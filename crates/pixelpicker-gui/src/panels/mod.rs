pub mod dialogs;
pub mod menu_bar;
pub mod pixel_info;
pub mod status;
pub mod viewport;
