pub mod creation;
pub mod divide;
pub mod planes;
pub mod query;
