// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_category_repository;
pub mod postgres_pickme_repository;
pub mod postgres_user_repository;

pub use in_memory::{InMemoryCategoryRepository, InMemoryPickmeRepository, InMemoryUserRepository};
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_pickme_repository::PostgresPickmeRepository;
pub use postgres_user_repository::PostgresUserRepository;
