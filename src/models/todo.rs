use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_EXPIRATION_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completion_percentage: u16,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
    pub completion_percentage: u16,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}

/// `created_at` is set when the input is built, never read from the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<u16>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Default for TodoItemInput {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            completion_percentage: None,
            expire_at: None,
            created_at: Utc::now(),
        }
    }
}

impl NewTodoItem {
    pub fn with_defaults(created_at: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            completion_percentage: 0,
            created_at,
            expire_at: created_at + Duration::days(DEFAULT_EXPIRATION_DAYS),
        }
    }

    pub fn from_input(input: TodoItemInput) -> Self {
        let mut item = Self::with_defaults(input.created_at);

        if let Some(title) = input.title {
            item.title = title;
        }
        if let Some(description) = input.description {
            item.description = description;
        }
        if let Some(completion_percentage) = input.completion_percentage {
            item.completion_percentage = completion_percentage;
        }
        if let Some(expire_at) = input.expire_at {
            item.expire_at = expire_at;
        }

        item
    }
}

impl TodoItem {
    pub fn from_new(id: i64, new: NewTodoItem) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            completion_percentage: new.completion_percentage,
            created_at: new.created_at,
            expire_at: new.expire_at,
        }
    }

    /// `id` and `created_at` never change.
    pub fn merge(&mut self, input: TodoItemInput) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(completion_percentage) = input.completion_percentage {
            self.completion_percentage = completion_percentage;
        }
        if let Some(expire_at) = input.expire_at {
            self.expire_at = expire_at;
        }
    }
}
