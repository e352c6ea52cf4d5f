use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{NewTodoItem, TodoItem};

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn insert(&self, item: NewTodoItem) -> Result<TodoItem, sqlx::Error>;
    async fn fetch_all(&self) -> Result<Vec<TodoItem>, sqlx::Error>;
    async fn fetch_expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TodoItem>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, sqlx::Error>;
    async fn update(&self, item: &TodoItem) -> Result<bool, sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[derive(Clone)]
pub struct SqliteTodoStore {
    db: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn insert(&self, item: NewTodoItem) -> Result<TodoItem, sqlx::Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO todo
                (title, description, completion_percentage, created_at, expire_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.completion_percentage)
        .bind(item.created_at)
        .bind(item.expire_at)
        .execute(&self.db)
        .await?
        .last_insert_rowid();

        debug!("inserted todo {}", id);
        Ok(TodoItem::from_new(id, item))
    }

    async fn fetch_all(&self) -> Result<Vec<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            "SELECT id, title, description, completion_percentage, created_at, expire_at FROM todo ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
    }

    async fn fetch_expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT id, title, description, completion_percentage, created_at, expire_at
            FROM todo
            WHERE expire_at >= ?1 AND expire_at < ?2
            ORDER BY id
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.db)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            "SELECT id, title, description, completion_percentage, created_at, expire_at FROM todo WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn update(&self, item: &TodoItem) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todo
            SET title = ?1,
                description = ?2,
                completion_percentage = ?3,
                expire_at = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.completion_percentage)
        .bind(item.expire_at)
        .bind(item.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        Ok(result > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();

        Ok(result > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }
}
