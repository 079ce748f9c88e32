use sea_orm::EntityTrait;
use tracing::instrument;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

impl PostgresService {
    /// Full-table read of `item`. No filtering, no pagination.
    #[instrument(name = "get_all_items", skip(self))]
    pub async fn get_all_items(&self) -> Result<Vec<entity::item::Model>, AppError> {
        use entity::item::Entity as ItemData;

        let item_data = ItemData::find()
            .all(&self.db)
            .await?;

        tracing::debug!(rows = item_data.len(), "fetched item table");

        Ok(item_data)
    }
}
