//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The `Deserialize`/plain DTOs its repository accepts

pub mod project;
pub mod user_project;
