use crate::storage::ObjectStorage;
use axum::extract::FromRef;
use sqlx::{Pool, Postgres};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Db,
    pub storage: ObjectStorage,
}

#[derive(Clone)]
pub struct Db {
    pub pool: Pool<Postgres>,
}
