//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the shape of a query result
//! - `Deserialize` create DTOs for inserts

pub mod article;
