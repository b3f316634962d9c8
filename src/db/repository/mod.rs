//! Repository layer: entity-scoped database operations.

mod record;

pub use record::*;
