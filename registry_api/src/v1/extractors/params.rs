use crate::v1::error::ErrorMessage;
use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};
use serde::Deserialize;
use shared::registry::filter::FilterCriteria;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilterParams {
    search: Option<String>,
    cities: Option<String>,
    networks: Option<String>,
    has_network: Option<bool>,
    min_capacity: Option<i32>,
    max_capacity: Option<i32>,
}

/// Filter criteria parsed from list query parameters. Multi-select
/// dimensions (`cities`, `networks`) arrive comma-separated.
#[derive(Debug, Clone)]
pub struct FilterQuery(pub FilterCriteria);

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = ErrorMessage;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ErrorMessage::from((StatusCode::BAD_REQUEST, e.to_string())))?;

        let networks = parse_network_list(params.networks.as_deref().unwrap_or_default())
            .map_err(|value| {
                ErrorMessage::from((
                    StatusCode::BAD_REQUEST,
                    format!("invalid network id: {value}"),
                ))
            })?;

        Ok(Self(FilterCriteria {
            search_query: params.search.unwrap_or_default(),
            cities: parse_city_list(params.cities.as_deref().unwrap_or_default()),
            networks,
            has_network: params.has_network,
            min_capacity: params.min_capacity,
            max_capacity: params.max_capacity,
        }))
    }
}

fn parse_city_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_network_list(raw: &str) -> Result<BTreeSet<Uuid>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<Uuid>().map_err(|_| id.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_list_splits_trims_and_drops_empty_segments() {
        let cities = parse_city_list(" Симферополь , Ялта ,, ");
        assert_eq!(
            cities,
            BTreeSet::from(["Симферополь".to_string(), "Ялта".to_string()])
        );
        assert!(parse_city_list("").is_empty());
    }

    #[test]
    fn network_list_rejects_a_malformed_id() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let parsed = parse_network_list(&format!("{a}, {b}")).unwrap();
        assert_eq!(parsed, BTreeSet::from([a, b]));

        assert_eq!(
            parse_network_list("not-a-uuid"),
            Err("not-a-uuid".to_string())
        );
        assert!(parse_network_list("").unwrap().is_empty());
    }
}
