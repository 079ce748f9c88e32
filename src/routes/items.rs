use std::sync::Arc;

use actix_web::{get, web};

use crate::db::postgres_service::PostgresService;
use crate::types::item::ItemRow;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/data")]
pub async fn data(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<ItemRow>> {
    let models = db.get_all_items().await?;

    let rows = models
        .into_iter()
        .map(ItemRow::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ApiResponse::Ok(rows))
}
