use async_trait::async_trait;

use crate::foods::dto::FoodRecord;
use crate::foods::store::JsonFoodStore;

/// Read-only food lookup shared by the JSON and Postgres backends.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// Backend name reported by the health route.
    fn mode(&self) -> &'static str;
    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<Vec<FoodRecord>>;
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FoodRecord>>;
    async fn get_all(&self, limit: usize) -> anyhow::Result<Vec<FoodRecord>>;
    async fn record_count(&self) -> anyhow::Result<usize>;
}

#[async_trait]
impl FoodRepository for JsonFoodStore {
    fn mode(&self) -> &'static str {
        "json"
    }

    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<Vec<FoodRecord>> {
        Ok(JsonFoodStore::search(self, query, limit))
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FoodRecord>> {
        Ok(JsonFoodStore::get_by_id(self, id))
    }

    async fn get_all(&self, limit: usize) -> anyhow::Result<Vec<FoodRecord>> {
        Ok(JsonFoodStore::get_all(self, limit))
    }

    async fn record_count(&self) -> anyhow::Result<usize> {
        Ok(self.len())
    }
}
