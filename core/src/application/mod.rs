use crate::{
    domain::common::{LadleConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        ingredient::repositories::PostgresIngredientRepository,
        object_storage::minio::MinioObjectStorage,
        recipe::repositories::PostgresRecipeRepository,
    },
};

pub type LadleService =
    Service<PostgresRecipeRepository, PostgresIngredientRepository, MinioObjectStorage>;

pub async fn create_service(config: LadleConfig) -> Result<LadleService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let ingredient_repository = PostgresIngredientRepository::new(postgres.get_db());
    let object_storage = MinioObjectStorage::new(config.object_storage.clone()).await;

    Ok(Service::new(
        recipe_repository,
        ingredient_repository,
        object_storage,
    ))
}
