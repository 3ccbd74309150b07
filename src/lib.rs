pub mod config;
pub mod cycle;
pub mod error;
pub mod host;
pub mod i18n;
pub mod presentation;
pub mod render;
pub mod status;
pub mod utils;
pub mod view;

pub use config::WidgetConfig;
pub use error::WidgetError;
