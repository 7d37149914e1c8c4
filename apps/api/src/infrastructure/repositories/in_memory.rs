//! In-memory repository implementations
//!
//! Used by the HTTP tests in place of PostgreSQL. They
//! mirror the PostgreSQL behaviour the handlers rely on: ids ascend from 1,
//! category titles are unique, and a negative list limit is a store error.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::category::{Category, CategoryFields};
use crate::domain::pickme::{CategoryFilter, Pickme, PickmeFields};
use crate::domain::repositories::{
    CategoryRepository, PickmeRepository, RepositoryError, RepositoryResult, User, UserRepository,
};

/// Rows keyed by id plus the next id to hand out
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Converts a list limit the way PostgreSQL's `LIMIT` does
fn row_limit(limit: i64) -> RepositoryResult<usize> {
    usize::try_from(limit)
        .map_err(|_| RepositoryError::Storage(format!("LIMIT must not be negative: {}", limit)))
}

/// Switch for simulating an unreachable store
#[derive(Default)]
struct Availability(AtomicBool);

impl Availability {
    fn set_unavailable(&self, unavailable: bool) {
        self.0.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.0.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("store unavailable".to_string()));
        }
        Ok(())
    }
}

/// In-memory implementation of CategoryRepository
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    table: RwLock<Table<Category>>,
    availability: Availability,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a storage error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.availability.set_unavailable(unavailable);
    }

    /// Number of stored categories
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn title_taken(table: &Table<Category>, title: &str, except: Option<i64>) -> bool {
    table
        .rows
        .values()
        .any(|c| c.title == title && Some(c.id) != except)
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self, limit: i64) -> RepositoryResult<Vec<Category>> {
        self.availability.check()?;
        let limit = row_limit(limit)?;
        let table = self.table.read().await;
        Ok(table.rows.values().take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        self.availability.check()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, fields: &CategoryFields) -> RepositoryResult<Category> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        if title_taken(&table, fields.title(), None) {
            return Err(RepositoryError::Conflict("categories_title_key".to_string()));
        }

        let now = Utc::now();
        let category = Category {
            id: table.allocate_id(),
            title: fields.title().to_string(),
            description: fields.description().map(str::to_string),
            image: fields.image().map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(category.id, category.clone());

        Ok(category)
    }

    async fn update(&self, id: i64, fields: &CategoryFields) -> RepositoryResult<Option<Category>> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        // A missing row is reported before a title conflict
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if title_taken(&table, fields.title(), Some(id)) {
            return Err(RepositoryError::Conflict("categories_title_key".to_string()));
        }

        let Some(category) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        category.title = fields.title().to_string();
        category.description = fields.description().map(str::to_string);
        category.image = fields.image().map(str::to_string);
        category.updated_at = Utc::now();

        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.availability.check()?;
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// In-memory implementation of PickmeRepository
#[derive(Default)]
pub struct InMemoryPickmeRepository {
    table: RwLock<Table<Pickme>>,
    availability: Availability,
}

impl InMemoryPickmeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a storage error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.availability.set_unavailable(unavailable);
    }

    /// Number of stored pickmes
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PickmeRepository for InMemoryPickmeRepository {
    async fn find_all(&self, filter: CategoryFilter, limit: i64) -> RepositoryResult<Vec<Pickme>> {
        self.availability.check()?;
        let limit = row_limit(limit)?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| filter.matches(p.category_id))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Pickme>> {
        self.availability.check()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, fields: &PickmeFields) -> RepositoryResult<Pickme> {
        self.availability.check()?;
        let mut table = self.table.write().await;

        let now = Utc::now();
        let pickme = Pickme {
            id: table.allocate_id(),
            name: fields.name().to_string(),
            description: fields.description().map(str::to_string),
            image: fields.image().map(str::to_string),
            category_id: fields.category_id(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(pickme.id, pickme.clone());

        Ok(pickme)
    }

    async fn update(&self, id: i64, fields: &PickmeFields) -> RepositoryResult<Option<Pickme>> {
        self.availability.check()?;
        let mut table = self.table.write().await;

        let Some(pickme) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        pickme.name = fields.name().to_string();
        pickme.description = fields.description().map(str::to_string);
        pickme.image = fields.image().map(str::to_string);
        pickme.category_id = fields.category_id();
        pickme.updated_at = Utc::now();

        Ok(Some(pickme.clone()))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.availability.check()?;
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a user, replacing any user with the same id
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
