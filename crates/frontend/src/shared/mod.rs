pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod i18n;
pub mod icons;
pub mod stats;
