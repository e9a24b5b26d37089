pub mod engine;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod model;
pub mod ui;
