//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Repositories come in two backings (in-memory and SeaORM) chosen at
//!   process start; services only see the traits.

pub mod catalog;
pub mod errors;
pub mod inquiry;
pub mod settings;
