use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored pickme item
///
/// `category_id` is not checked against existing categories.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Pickme {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a pickme, as written by create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickmeFields {
    name: String,
    description: Option<String>,
    image: Option<String>,
    category_id: Option<i64>,
}

impl PickmeFields {
    /// Validates the raw request fields
    ///
    /// # Returns
    /// * `Ok(PickmeFields)` - If a non-empty name is present
    /// * `Err(String)` - If the name is missing or empty
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        image: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Self, String> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err("name is required".to_string()),
        };

        Ok(Self {
            name,
            description,
            image,
            category_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}

/// Category restriction applied when listing pickmes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every pickme regardless of category
    All,
    /// Only pickmes whose `category_id` equals the given id
    Only(i64),
}

impl CategoryFilter {
    /// Builds a filter from the `category` query value
    ///
    /// `0` is the "no category given" default. It selects everything unless
    /// `zero_is_id` is set, in which case it is treated as a real id.
    ///
    /// # Example
    /// ```
    /// use pickme_api::domain::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_query(0, false), CategoryFilter::All);
    /// assert_eq!(CategoryFilter::from_query(0, true), CategoryFilter::Only(0));
    /// assert_eq!(CategoryFilter::from_query(3, false), CategoryFilter::Only(3));
    /// ```
    pub fn from_query(category: i64, zero_is_id: bool) -> Self {
        if category == 0 && !zero_is_id {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category)
        }
    }

    /// Returns true if a pickme with the given category passes the filter
    pub fn matches(&self, category_id: Option<i64>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => category_id == Some(*id),
        }
    }
}
