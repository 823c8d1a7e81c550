use crate::registry::Factory;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// User-selected restrictions on the factory list. An empty or unset
/// dimension leaves the list unrestricted; active dimensions are AND-ed
/// together, while members of a multi-select dimension are OR-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the factory name.
    pub search_query: String,
    pub cities: BTreeSet<String>,
    pub networks: BTreeSet<Uuid>,
    /// `Some(true)` keeps only factories that belong to a network,
    /// `Some(false)` only those that do not, `None` keeps both.
    pub has_network: Option<bool>,
    /// Inclusive bounds; `None` is unbounded. `min > max` is a legal
    /// configuration that matches nothing.
    pub min_capacity: Option<i32>,
    pub max_capacity: Option<i32>,
}

/// Returns the factories passing `criteria`, ranked factories first in
/// ascending ranking order. Unranked factories (and equal rankings) keep
/// their input order. Inputs are never mutated.
pub fn filter_factories<'a>(
    factories: &'a [Factory],
    criteria: &FilterCriteria,
) -> Vec<&'a Factory> {
    let needle = criteria.search_query.to_lowercase();
    let mut matched: Vec<&Factory> = factories
        .iter()
        .filter(|f| passes(f, criteria, &needle))
        .collect();
    // Stable sort, so equal keys preserve input order.
    matched.sort_by_key(|f| ranking_key(f));
    matched
}

fn passes(factory: &Factory, criteria: &FilterCriteria, needle: &str) -> bool {
    if !needle.is_empty() && !factory.name.to_lowercase().contains(needle) {
        return false;
    }
    if !criteria.cities.is_empty() && !criteria.cities.contains(&factory.city) {
        return false;
    }
    if !criteria.networks.is_empty()
        && !factory
            .network_id
            .is_some_and(|id| criteria.networks.contains(&id))
    {
        return false;
    }
    if let Some(wants_network) = criteria.has_network
        && factory.network_id.is_some() != wants_network
    {
        return false;
    }
    if let Some(min) = criteria.min_capacity
        && factory.capacity < min
    {
        return false;
    }
    if let Some(max) = criteria.max_capacity
        && factory.capacity > max
    {
        return false;
    }
    true
}

/// Ranked factories (ranking > 0) sort ahead of everything else; a ranking
/// of 0 counts as unranked.
fn ranking_key(factory: &Factory) -> (bool, i32) {
    match factory.ranking {
        Some(r) if r > 0 => (false, r),
        _ => (true, 0),
    }
}

/// Totals displayed alongside the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub count: usize,
    pub total_capacity: i64,
}

/// Single-pass accumulation over an already-filtered list.
pub fn summarize(factories: &[&Factory]) -> FilterSummary {
    factories
        .iter()
        .fold(FilterSummary::default(), |mut acc, f| {
            acc.count += 1;
            acc.total_capacity += i64::from(f.capacity);
            acc
        })
}
