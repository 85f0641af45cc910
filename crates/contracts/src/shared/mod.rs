pub mod api_error;
pub mod i18n;
pub mod stats;
pub mod workspace;
