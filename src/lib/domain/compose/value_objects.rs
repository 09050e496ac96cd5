//! Compose value objects

pub mod email_address;
pub mod smtp_port;
