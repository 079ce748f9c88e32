use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Deserialize};

use crate::types::error::AppError;

/// Wire shape of one `item` row. Price is coerced to a JSON number.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ItemRow {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl TryFrom<entity::item::Model> for ItemRow {
    type Error = AppError;

    fn try_from(model: entity::item::Model) -> Result<Self, AppError> {
        let price = model.price.to_f64().ok_or_else(|| {
            AppError::Serialize(format!("price {} is not representable as f64", model.price))
        })?;

        Ok(ItemRow {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price,
        })
    }
}
