// Repository contracts (ports)
// Implemented by the infrastructure layer

pub mod category_repository;
pub mod errors;
pub mod pickme_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use pickme_repository::PickmeRepository;
pub use user_repository::{User, UserRepository};
