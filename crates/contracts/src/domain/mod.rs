pub mod a001_document;
pub mod a002_chat;
pub mod common;
