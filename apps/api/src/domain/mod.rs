// Domain layer module exports
// Entities, input value types and repository contracts.
// Domain is independent of infrastructure concerns

pub mod category;
pub mod pickme;
pub mod repositories;
pub mod user;

pub use category::{Category, CategoryFields};
pub use pickme::{CategoryFilter, Pickme, PickmeFields};
