//! Domain layer

pub mod compose;
