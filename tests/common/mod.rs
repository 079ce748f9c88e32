use std::sync::Arc;
use sea_orm::{EntityTrait, Set};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use items_web::db::postgres_service::PostgresService;
use items_web::config::{DbConfig, EnvConfig};

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            container,
        }
    }

    pub async fn seed_items(&self, items: Vec<entity::item::Model>) {
        let models = items.into_iter().map(|item| entity::item::ActiveModel {
            id: Set(item.id),
            name: Set(item.name),
            quantity: Set(item.quantity),
            price: Set(item.price),
        });

        entity::item::Entity::insert_many(models)
            .exec(self.db.connection())
            .await
            .expect("Failed to seed items");
    }

    /// Kills the backing database so handlers hit the failure branch.
    pub async fn stop_database(&self) {
        self.container.stop().await.expect("Failed to stop postgres container");
    }
}

#[allow(dead_code)]
pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 5000,
        db: DbConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: "pgdb".to_string(),
            user: "leesa".to_string(),
            password: "1234".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use rust_decimal::Decimal;

    pub fn widget() -> entity::item::Model {
        entity::item::Model {
            id: 1,
            name: "Widget".to_string(),
            quantity: 10,
            price: Decimal::new(250, 2),
        }
    }

    pub fn sample_items() -> Vec<entity::item::Model> {
        vec![
            widget(),
            entity::item::Model {
                id: 2,
                name: "Gadget".to_string(),
                quantity: 3,
                price: Decimal::new(1999, 2),
            },
            entity::item::Model {
                id: 3,
                name: "Gizmo".to_string(),
                quantity: 0,
                price: Decimal::new(50, 2),
            },
        ]
    }
}
