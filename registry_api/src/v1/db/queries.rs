use shared::registry::{Factory, Network};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

const FACTORY_COLUMNS: &str = "id, name, city, model, address, capacity, yearly_output, \
     description, director, tax_id, website, ranking, network_id, latitude, longitude, \
     photo1, photo2, photo3";

const NETWORK_COLUMNS: &str = "id, name, description, logo";

/// v7 ids are time-ordered, so this is creation order. The filter engine's
/// stable sort preserves it for unranked factories.
pub async fn list_factories(pool: &Pool<Postgres>) -> Result<Vec<Factory>, QueryError> {
    let query = format!("SELECT {FACTORY_COLUMNS} FROM factories ORDER BY id");
    sqlx::query_as::<_, Factory>(&query)
        .fetch_all(pool)
        .await
        .map_err(QueryError::Sql)
}

pub async fn get_factory(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Factory>, QueryError> {
    let query = format!("SELECT {FACTORY_COLUMNS} FROM factories WHERE id = $1");
    sqlx::query_as::<_, Factory>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(QueryError::Sql)
}

pub async fn insert_factory(pool: &Pool<Postgres>, factory: &Factory) -> Result<(), QueryError> {
    let query = format!(
        r"
        INSERT INTO factories ({FACTORY_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
        "
    );
    bind_factory(sqlx::query(&query), factory).execute(pool).await?;
    Ok(())
}

pub async fn update_factory(pool: &Pool<Postgres>, factory: &Factory) -> Result<(), QueryError> {
    bind_factory(
        sqlx::query(
            r"
            UPDATE factories
            SET name = $2, city = $3, model = $4, address = $5, capacity = $6,
                yearly_output = $7, description = $8, director = $9, tax_id = $10,
                website = $11, ranking = $12, network_id = $13, latitude = $14,
                longitude = $15, photo1 = $16, photo2 = $17, photo3 = $18
            WHERE id = $1
            ",
        ),
        factory,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_factory(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, QueryError> {
    let result = sqlx::query("DELETE FROM factories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

fn bind_factory<'q>(
    query: sqlx::query::Query<'q, Postgres, sqlx::postgres::PgArguments>,
    factory: &'q Factory,
) -> sqlx::query::Query<'q, Postgres, sqlx::postgres::PgArguments> {
    query
        .bind(factory.id)
        .bind(&factory.name)
        .bind(&factory.city)
        .bind(&factory.model)
        .bind(&factory.address)
        .bind(factory.capacity)
        .bind(factory.yearly_output)
        .bind(&factory.description)
        .bind(&factory.director)
        .bind(&factory.tax_id)
        .bind(&factory.website)
        .bind(factory.ranking)
        .bind(factory.network_id)
        .bind(factory.latitude)
        .bind(factory.longitude)
        .bind(&factory.photo1)
        .bind(&factory.photo2)
        .bind(&factory.photo3)
}

pub async fn list_networks(pool: &Pool<Postgres>) -> Result<Vec<Network>, QueryError> {
    let query = format!("SELECT {NETWORK_COLUMNS} FROM networks ORDER BY name");
    sqlx::query_as::<_, Network>(&query)
        .fetch_all(pool)
        .await
        .map_err(QueryError::Sql)
}

pub async fn get_network(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Network>, QueryError> {
    let query = format!("SELECT {NETWORK_COLUMNS} FROM networks WHERE id = $1");
    sqlx::query_as::<_, Network>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(QueryError::Sql)
}

pub async fn insert_network(pool: &Pool<Postgres>, network: &Network) -> Result<(), QueryError> {
    let query = format!(
        r"
        INSERT INTO networks ({NETWORK_COLUMNS})
        VALUES ($1, $2, $3, $4)
        "
    );
    sqlx::query(&query)
        .bind(network.id)
        .bind(&network.name)
        .bind(&network.description)
        .bind(&network.logo)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_network(pool: &Pool<Postgres>, network: &Network) -> Result<(), QueryError> {
    sqlx::query(
        r"
        UPDATE networks
        SET name = $2, description = $3, logo = $4
        WHERE id = $1
        ",
    )
    .bind(network.id)
    .bind(&network.name)
    .bind(&network.description)
    .bind(&network.logo)
    .execute(pool)
    .await?;
    Ok(())
}

/// Factories referencing the deleted network keep their network_id; the
/// application tolerates dangling references.
pub async fn delete_network(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, QueryError> {
    let result = sqlx::query("DELETE FROM networks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
