//! Compose models

pub mod document;
pub mod request;
