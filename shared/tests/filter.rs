use shared::registry::Factory;
use shared::registry::filter::{FilterCriteria, FilterSummary, filter_factories, summarize};
use std::collections::BTreeSet;
use uuid::Uuid;

fn factory(name: &str, city: &str, capacity: i32, ranking: Option<i32>) -> Factory {
    Factory {
        id: Uuid::now_v7(),
        name: name.to_string(),
        city: city.to_string(),
        model: "СБ-145".to_string(),
        address: format!("{city}, ул. Заводская, 1"),
        capacity,
        yearly_output: capacity * 2000,
        description: String::new(),
        director: None,
        tax_id: None,
        website: None,
        ranking,
        network_id: None,
        latitude: None,
        longitude: None,
        photo1: None,
        photo2: None,
        photo3: None,
    }
}

fn in_network(mut f: Factory, network_id: Uuid) -> Factory {
    f.network_id = Some(network_id);
    f
}

fn names<'a>(factories: &[&'a Factory]) -> Vec<&'a str> {
    factories.iter().map(|f| f.name.as_str()).collect()
}

fn cities(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|c| c.to_string()).collect()
}

#[test]
fn empty_criteria_returns_everything_in_ranking_order() {
    let factories = vec![
        factory("Бетон-Юг", "Ялта", 60, None),
        factory("Крымбетон", "Симферополь", 90, Some(2)),
        factory("Монолит", "Севастополь", 120, Some(1)),
    ];

    let result = filter_factories(&factories, &FilterCriteria::default());

    assert_eq!(names(&result), ["Монолит", "Крымбетон", "Бетон-Юг"]);
}

#[test]
fn rankings_zero_three_one_come_back_one_three_zero() {
    let factories = vec![
        factory("a", "Ялта", 50, Some(0)),
        factory("b", "Ялта", 50, Some(3)),
        factory("c", "Ялта", 50, Some(1)),
    ];

    let result = filter_factories(&factories, &FilterCriteria::default());

    assert_eq!(names(&result), ["c", "b", "a"]);
}

#[test]
fn absent_and_zero_rankings_are_both_unranked_and_keep_input_order() {
    let factories = vec![
        factory("first", "Ялта", 50, Some(0)),
        factory("second", "Ялта", 50, None),
        factory("third", "Ялта", 50, Some(0)),
    ];

    let result = filter_factories(&factories, &FilterCriteria::default());

    assert_eq!(names(&result), ["first", "second", "third"]);
}

#[test]
fn equal_rankings_keep_input_order() {
    let factories = vec![
        factory("early", "Ялта", 50, Some(2)),
        factory("late", "Ялта", 50, Some(2)),
        factory("top", "Ялта", 50, Some(1)),
    ];

    let result = filter_factories(&factories, &FilterCriteria::default());

    assert_eq!(names(&result), ["top", "early", "late"]);
}

#[test]
fn city_filter_keeps_matching_factories_in_input_order() {
    let factories = vec![
        factory("ЖБИ-1", "Симферополь", 80, None),
        factory("Южный Бетон", "Ялта", 70, None),
        factory("ЖБИ-2", "Симферополь", 95, None),
    ];
    let criteria = FilterCriteria {
        cities: cities(&["Симферополь"]),
        ..FilterCriteria::default()
    };

    let result = filter_factories(&factories, &criteria);

    assert_eq!(names(&result), ["ЖБИ-1", "ЖБИ-2"]);
}

#[test]
fn multiple_cities_are_or_ed() {
    let factories = vec![
        factory("a", "Симферополь", 80, None),
        factory("b", "Ялта", 70, None),
        factory("c", "Керчь", 95, None),
    ];
    let criteria = FilterCriteria {
        cities: cities(&["Ялта", "Керчь"]),
        ..FilterCriteria::default()
    };

    assert_eq!(names(&filter_factories(&factories, &criteria)), ["b", "c"]);
}

#[test]
fn capacity_bounds_are_inclusive_on_both_ends() {
    let factories = vec![
        factory("small", "Ялта", 40, None),
        factory("medium", "Ялта", 75, None),
        factory("large", "Ялта", 100, None),
    ];
    let criteria = FilterCriteria {
        min_capacity: Some(50),
        max_capacity: Some(100),
        ..FilterCriteria::default()
    };

    let result = filter_factories(&factories, &criteria);

    assert_eq!(names(&result), ["medium", "large"]);
}

#[test]
fn contradictory_capacity_bounds_yield_an_empty_result() {
    let factories = vec![factory("any", "Ялта", 75, None)];
    let criteria = FilterCriteria {
        min_capacity: Some(100),
        max_capacity: Some(50),
        ..FilterCriteria::default()
    };

    assert!(filter_factories(&factories, &criteria).is_empty());
}

#[test]
fn has_network_tristate() {
    let net = Uuid::now_v7();
    let factories = vec![
        in_network(factory("member", "Ялта", 50, None), net),
        factory("independent", "Ялта", 50, None),
    ];

    let wants = FilterCriteria {
        has_network: Some(true),
        ..FilterCriteria::default()
    };
    assert_eq!(names(&filter_factories(&factories, &wants)), ["member"]);

    let refuses = FilterCriteria {
        has_network: Some(false),
        ..FilterCriteria::default()
    };
    assert_eq!(
        names(&filter_factories(&factories, &refuses)),
        ["independent"]
    );

    let unset = FilterCriteria::default();
    assert_eq!(filter_factories(&factories, &unset).len(), 2);
}

#[test]
fn network_set_restricts_to_members() {
    let net_a = Uuid::now_v7();
    let net_b = Uuid::now_v7();
    let factories = vec![
        in_network(factory("a", "Ялта", 50, None), net_a),
        in_network(factory("b", "Ялта", 50, None), net_b),
        factory("independent", "Ялта", 50, None),
    ];
    let criteria = FilterCriteria {
        networks: BTreeSet::from([net_a]),
        ..FilterCriteria::default()
    };

    assert_eq!(names(&filter_factories(&factories, &criteria)), ["a"]);
}

#[test]
fn search_is_a_case_insensitive_substring_match() {
    let factories = vec![
        factory("Крымбетон", "Ялта", 50, None),
        factory("Монолит-Строй", "Ялта", 50, None),
    ];

    let criteria = FilterCriteria {
        search_query: "крымБЕТОН".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(names(&filter_factories(&factories, &criteria)), ["Крымбетон"]);

    let partial = FilterCriteria {
        search_query: "оли".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        names(&filter_factories(&factories, &partial)),
        ["Монолит-Строй"]
    );

    let empty = FilterCriteria {
        search_query: String::new(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter_factories(&factories, &empty).len(), 2);
}

#[test]
fn output_is_a_subset_and_input_is_untouched() {
    let factories = vec![
        factory("a", "Ялта", 50, Some(2)),
        factory("b", "Керчь", 90, None),
        factory("c", "Ялта", 70, Some(1)),
    ];
    let snapshot = factories.clone();
    let criteria = FilterCriteria {
        cities: cities(&["Ялта"]),
        min_capacity: Some(60),
        ..FilterCriteria::default()
    };

    let result = filter_factories(&factories, &criteria);

    assert!(result.iter().all(|r| factories.iter().any(|f| f.id == r.id)));
    assert_eq!(factories, snapshot);
}

#[test]
fn refiltering_the_filtered_output_is_a_fixpoint() {
    let factories = vec![
        factory("a", "Ялта", 50, Some(2)),
        factory("b", "Керчь", 90, None),
        factory("c", "Ялта", 70, Some(1)),
        factory("d", "Ялта", 65, None),
    ];
    let criteria = FilterCriteria {
        cities: cities(&["Ялта"]),
        min_capacity: Some(60),
        ..FilterCriteria::default()
    };

    let once: Vec<Factory> = filter_factories(&factories, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter_factories(&once, &criteria);

    assert_eq!(names(&twice), once.iter().map(|f| f.name.as_str()).collect::<Vec<_>>());
}

#[test]
fn narrowing_a_criterion_never_grows_the_result() {
    let net = Uuid::now_v7();
    let factories = vec![
        in_network(factory("a", "Симферополь", 40, Some(1)), net),
        factory("b", "Ялта", 75, None),
        factory("c", "Симферополь", 100, Some(2)),
        factory("d", "Керчь", 60, None),
    ];

    let broad = FilterCriteria {
        cities: cities(&["Симферополь", "Ялта", "Керчь"]),
        ..FilterCriteria::default()
    };
    let narrowed_cities = FilterCriteria {
        cities: cities(&["Симферополь", "Ялта"]),
        ..broad.clone()
    };
    assert!(
        filter_factories(&factories, &narrowed_cities).len()
            <= filter_factories(&factories, &broad).len()
    );

    let raised_min = FilterCriteria {
        min_capacity: Some(70),
        ..broad.clone()
    };
    assert!(
        filter_factories(&factories, &raised_min).len()
            <= filter_factories(&factories, &broad).len()
    );

    let tightened_network = FilterCriteria {
        has_network: Some(true),
        ..broad.clone()
    };
    assert!(
        filter_factories(&factories, &tightened_network).len()
            <= filter_factories(&factories, &broad).len()
    );
}

#[test]
fn filters_compose_with_logical_and() {
    let factories = vec![
        factory("Крымбетон", "Симферополь", 80, None),
        factory("Крымбетон-2", "Ялта", 80, None),
        factory("Монолит", "Симферополь", 80, None),
        factory("Крымбетон-3", "Симферополь", 30, None),
    ];
    let criteria = FilterCriteria {
        search_query: "крымбетон".to_string(),
        cities: cities(&["Симферополь"]),
        min_capacity: Some(50),
        ..FilterCriteria::default()
    };

    assert_eq!(names(&filter_factories(&factories, &criteria)), ["Крымбетон"]);
}

#[test]
fn summary_accumulates_count_and_capacity() {
    let factories = vec![
        factory("a", "Ялта", 50, None),
        factory("b", "Ялта", 75, None),
        factory("c", "Керчь", 100, None),
    ];
    let visible = filter_factories(&factories, &FilterCriteria::default());

    assert_eq!(
        summarize(&visible),
        FilterSummary {
            count: 3,
            total_capacity: 225
        }
    );
    assert_eq!(summarize(&[]), FilterSummary::default());
}
