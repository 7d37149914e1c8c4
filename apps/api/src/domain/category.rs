use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored category
///
/// `title` is unique across all categories; the store reports a duplicate
/// as [`RepositoryError::Conflict`](crate::domain::repositories::RepositoryError::Conflict).
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a category, as written by create and update
///
/// Update is a full replace: a `None` here clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    title: String,
    description: Option<String>,
    image: Option<String>,
}

impl CategoryFields {
    /// Validates the raw request fields
    ///
    /// # Returns
    /// * `Ok(CategoryFields)` - If a non-empty title is present
    /// * `Err(String)` - If the title is missing or empty
    ///
    /// # Example
    /// ```
    /// use pickme_api::domain::CategoryFields;
    ///
    /// let fields = CategoryFields::new(Some("Food".to_string()), None, None).expect("valid");
    /// assert_eq!(fields.title(), "Food");
    /// assert!(CategoryFields::new(Some(String::new()), None, None).is_err());
    /// ```
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, String> {
        let title = match title {
            Some(title) if !title.is_empty() => title,
            _ => return Err("title is required".to_string()),
        };

        Ok(Self {
            title,
            description,
            image,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
