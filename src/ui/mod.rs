pub mod app;
pub mod config_panel;
pub mod editor_panel;
pub mod response_panel;
pub mod dialogs;

pub mod settings;
pub mod settings_io;
