use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shared::registry::{Factory, Network};
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryListDto {
    pub requested_at: DateTime<Utc>,
    pub count: usize,
    pub total_capacity: i64,
    pub factories: Vec<Factory>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlotDto {
    pub upload_url: String,
    pub object_path: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Distinguishes an absent field from an explicit `null`: absent stays
/// `None`, `null` becomes `Some(None)` and clears the column.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn check_ranking(errors: &mut Vec<FieldError>, ranking: Option<i32>) {
    if ranking.is_some_and(|r| r < 0) {
        errors.push(FieldError {
            field: "ranking",
            message: "must be non-negative",
        });
    }
}

fn check_coordinates(errors: &mut Vec<FieldError>, latitude: Option<f64>, longitude: Option<f64>) {
    if latitude.is_some_and(|v| !(-90.0..=90.0).contains(&v)) {
        errors.push(FieldError {
            field: "latitude",
            message: "must be between -90 and 90",
        });
    }
    if longitude.is_some_and(|v| !(-180.0..=180.0).contains(&v)) {
        errors.push(FieldError {
            field: "longitude",
            message: "must be between -180 and 180",
        });
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryPayload {
    pub name: String,
    pub city: String,
    pub model: String,
    pub address: String,
    pub capacity: i32,
    pub yearly_output: i32,
    pub description: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub ranking: Option<i32>,
    #[serde(default)]
    pub network_id: Option<Uuid>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo1: Option<String>,
    #[serde(default)]
    pub photo2: Option<String>,
    #[serde(default)]
    pub photo3: Option<String>,
}

impl FactoryPayload {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("model", &self.model),
            ("address", &self.address),
        ] {
            if blank(value) {
                errors.push(FieldError {
                    field,
                    message: "must not be blank",
                });
            }
        }
        if self.capacity < 0 {
            errors.push(FieldError {
                field: "capacity",
                message: "must be non-negative",
            });
        }
        if self.yearly_output < 0 {
            errors.push(FieldError {
                field: "yearlyOutput",
                message: "must be non-negative",
            });
        }
        check_ranking(&mut errors, self.ranking);
        check_coordinates(&mut errors, self.latitude, self.longitude);
        errors
    }

    pub fn into_factory(self, id: Uuid) -> Factory {
        Factory {
            id,
            name: self.name,
            city: self.city,
            model: self.model,
            address: self.address,
            capacity: self.capacity,
            yearly_output: self.yearly_output,
            description: self.description,
            director: self.director,
            tax_id: self.tax_id,
            website: self.website,
            ranking: self.ranking,
            network_id: self.network_id,
            latitude: self.latitude,
            longitude: self.longitude,
            photo1: self.photo1,
            photo2: self.photo2,
            photo3: self.photo3,
        }
    }
}

/// Partial update: absent fields stay unchanged, `null` clears an optional
/// column, a value replaces it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub yearly_output: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub director: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tax_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ranking: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub network_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub longitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo1: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo2: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo3: Option<Option<String>>,
}

impl FactoryPatch {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("model", &self.model),
            ("address", &self.address),
        ] {
            if value.as_deref().is_some_and(blank) {
                errors.push(FieldError {
                    field,
                    message: "must not be blank",
                });
            }
        }
        if self.capacity.is_some_and(|c| c < 0) {
            errors.push(FieldError {
                field: "capacity",
                message: "must be non-negative",
            });
        }
        if self.yearly_output.is_some_and(|y| y < 0) {
            errors.push(FieldError {
                field: "yearlyOutput",
                message: "must be non-negative",
            });
        }
        check_ranking(&mut errors, self.ranking.flatten());
        check_coordinates(&mut errors, self.latitude.flatten(), self.longitude.flatten());
        errors
    }

    pub fn apply(self, factory: Factory) -> Factory {
        Factory {
            id: factory.id,
            name: self.name.unwrap_or(factory.name),
            city: self.city.unwrap_or(factory.city),
            model: self.model.unwrap_or(factory.model),
            address: self.address.unwrap_or(factory.address),
            capacity: self.capacity.unwrap_or(factory.capacity),
            yearly_output: self.yearly_output.unwrap_or(factory.yearly_output),
            description: self.description.unwrap_or(factory.description),
            director: self.director.unwrap_or(factory.director),
            tax_id: self.tax_id.unwrap_or(factory.tax_id),
            website: self.website.unwrap_or(factory.website),
            ranking: self.ranking.unwrap_or(factory.ranking),
            network_id: self.network_id.unwrap_or(factory.network_id),
            latitude: self.latitude.unwrap_or(factory.latitude),
            longitude: self.longitude.unwrap_or(factory.longitude),
            photo1: self.photo1.unwrap_or(factory.photo1),
            photo2: self.photo2.unwrap_or(factory.photo2),
            photo3: self.photo3.unwrap_or(factory.photo3),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl NetworkPayload {
    pub fn validate(&self) -> Vec<FieldError> {
        if blank(&self.name) {
            vec![FieldError {
                field: "name",
                message: "must not be blank",
            }]
        } else {
            Vec::new()
        }
    }

    pub fn into_network(self, id: Uuid) -> Network {
        Network {
            id,
            name: self.name,
            description: self.description,
            logo: self.logo,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
}

impl NetworkPatch {
    pub fn validate(&self) -> Vec<FieldError> {
        if self.name.as_deref().is_some_and(blank) {
            vec![FieldError {
                field: "name",
                message: "must not be blank",
            }]
        } else {
            Vec::new()
        }
    }

    pub fn apply(self, network: Network) -> Network {
        Network {
            id: network.id,
            name: self.name.unwrap_or(network.name),
            description: self.description.unwrap_or(network.description),
            logo: self.logo.unwrap_or(network.logo),
        }
    }
}
