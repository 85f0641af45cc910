pub mod aggregate;
pub mod session;
