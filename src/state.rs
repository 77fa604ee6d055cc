use crate::config::{AppConfig, FoodBackend};
use crate::db::PgFoodRepository;
use crate::foods::{repo::FoodRepository, store::JsonFoodStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub foods: Arc<dyn FoodRepository>,
}

impl AppState {
    /// Reads config and opens the selected backend. The JSON dataset is
    /// fully loaded before the state is returned.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let foods = match &config.backend {
            FoodBackend::Json { path } => {
                let path = path.clone();
                let store = tokio::task::spawn_blocking(move || JsonFoodStore::load_or_empty(path)).await?;
                Arc::new(store) as Arc<dyn FoodRepository>
            }
            FoodBackend::Postgres { database_url } => {
                Arc::new(PgFoodRepository::connect(database_url).await?) as Arc<dyn FoodRepository>
            }
        };
        tracing::info!(mode = foods.mode(), "food backend ready");

        Ok(Self { config, foods })
    }

    pub fn from_parts(config: Arc<AppConfig>, foods: Arc<dyn FoodRepository>) -> Self {
        Self { config, foods }
    }

    /// JSON-mode state over in-memory records.
    pub fn fake(foods: JsonFoodStore) -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            backend: FoodBackend::Json {
                path: "fake.json".into(),
            },
        });
        Self::from_parts(config, Arc::new(foods))
    }
}
