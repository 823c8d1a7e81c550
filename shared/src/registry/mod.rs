pub mod filter;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One physical concrete-mixing plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    /// Plant model designation, e.g. "СБ-145".
    pub model: String,
    pub address: String,
    /// Throughput in cubic meters per hour.
    pub capacity: i32,
    /// Annual production in cubic meters per year.
    pub yearly_output: i32,
    pub description: String,
    pub director: Option<String>,
    pub tax_id: Option<String>,
    pub website: Option<String>,
    /// Competitive rank; `None` or 0 means unranked.
    pub ranking: Option<i32>,
    pub network_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo1: Option<String>,
    pub photo2: Option<String>,
    pub photo3: Option<String>,
}

/// A named group of factories (brand/franchise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
}
