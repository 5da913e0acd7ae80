//! Read access to the movie table.
//!
//! Handlers only ever see `dyn MovieStore`, so tests can swap the database
//! for an in-memory vector.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use tracing::debug;

use crate::entities::movie;

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Total number of rows, unfiltered.
    async fn count(&self) -> Result<u64, DbErr>;

    /// Rows `[offset, offset + limit)` in primary key order.
    async fn range(&self, offset: u64, limit: u64) -> Result<Vec<movie::Model>, DbErr>;

    async fn find_by_id(&self, id: i64) -> Result<Option<movie::Model>, DbErr>;
}

#[derive(Clone)]
pub struct SqlMovieStore {
    db: DatabaseConnection,
}

impl SqlMovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieStore for SqlMovieStore {
    async fn count(&self) -> Result<u64, DbErr> {
        movie::Entity::find().count(&self.db).await
    }

    async fn range(&self, offset: u64, limit: u64) -> Result<Vec<movie::Model>, DbErr> {
        debug!(offset, limit, "fetching movie range");
        // sqlite binds offsets as i64; nothing can live past that
        if i64::try_from(offset).is_err() {
            return Ok(Vec::new());
        }
        let limit = limit.min(i64::MAX as u64);
        movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<movie::Model>, DbErr> {
        // ids outside the column's range cannot match any row
        let Ok(id) = i32::try_from(id) else {
            return Ok(None);
        };
        movie::Entity::find_by_id(id).one(&self.db).await
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;
