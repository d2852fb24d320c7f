//! Engine Tests
//!
//! Tests verify:
//! - Mutation and sort-state invalidation behave as one unit
//! - Command routing through execute()
//! - Field validation and truncation at the add boundary
//! - The end-to-end backpack scenario (sort, search, re-sort)

use rucksack::{Command, Config, Criterion, Engine, Item, Reply, RucksackError};

fn item(name: &str, category: &str, quantity: i64, priority: i64) -> Item {
    Item::new(name, category, quantity, priority).unwrap()
}

// =============================================================================
// Invalidation Tests
// =============================================================================

#[test]
fn test_add_invalidates_every_criterion() {
    let mut engine = Engine::new();
    engine.add(item("ammo", "weapons", 10, 5)).unwrap();
    engine.sort(Criterion::Name);
    assert!(engine.is_sorted_by(Criterion::Name));

    engine.add(item("rope", "tools", 1, 2)).unwrap();
    for criterion in [Criterion::Name, Criterion::Category, Criterion::Priority] {
        assert!(!engine.is_sorted_by(criterion));
    }
    assert_eq!(engine.sorted_by(), None);
}

#[test]
fn test_remove_invalidates_every_criterion() {
    let mut engine = Engine::new();
    engine.add(item("ammo", "weapons", 10, 5)).unwrap();
    engine.add(item("rope", "tools", 1, 2)).unwrap();
    engine.sort(Criterion::Priority);
    assert!(engine.is_sorted_by(Criterion::Priority));

    engine.remove_by_name("rope").unwrap();
    for criterion in [Criterion::Name, Criterion::Category, Criterion::Priority] {
        assert!(!engine.is_sorted_by(criterion));
    }
}

#[test]
fn test_failed_remove_does_not_touch_store_or_state() {
    let mut engine = Engine::new();
    engine.add(item("ammo", "weapons", 10, 5)).unwrap();
    engine.sort(Criterion::Name);

    assert!(engine.remove_by_name("ghost").is_err());
    assert_eq!(engine.len(), 1);
    // An unsuccessful remove is not a mutation
    assert!(engine.is_sorted_by(Criterion::Name));
}

#[test]
fn test_sorting_an_empty_store_still_validates_the_state() {
    let mut engine = Engine::new();
    let comparisons = engine.sort(Criterion::Name);
    assert_eq!(comparisons, 0);
    assert!(engine.is_sorted_by(Criterion::Name));
    // Searching an empty but validly sorted store is a plain miss
    assert!(matches!(
        engine.search_by_name("anything"),
        Err(RucksackError::NotFound { .. })
    ));
}

// =============================================================================
// Boundary Validation Tests
// =============================================================================

#[test]
fn test_add_to_full_engine_fails_and_count_is_unchanged() {
    let mut engine = Engine::with_config(Config::builder().capacity(2).build());
    engine.add(item("a", "misc", 1, 1)).unwrap();
    engine.add(item("b", "misc", 1, 1)).unwrap();

    let result = engine.add(item("c", "misc", 1, 1));
    assert_eq!(result, Err(RucksackError::Full { capacity: 2 }));
    assert_eq!(engine.len(), 2);
}

#[test]
fn test_add_revalidates_even_prechecked_input() {
    let mut engine = Engine::new();

    // Fields are public; a hand-built invalid item must still be rejected
    let bogus = Item {
        name: "bogus".to_string(),
        category: "misc".to_string(),
        quantity: 0,
        priority: 9,
    };
    assert!(matches!(
        engine.add(bogus),
        Err(RucksackError::InvalidField { .. })
    ));
    assert!(engine.is_empty());
}

#[test]
fn test_long_fields_are_truncated_on_entry() {
    let config = Config::builder()
        .max_name_len(5)
        .max_category_len(4)
        .build();
    let mut engine = Engine::with_config(config);

    engine
        .add(item("longername", "verylongcategory", 1, 3))
        .unwrap();

    let stored = &engine.snapshot()[0];
    assert_eq!(stored.name, "longe");
    assert_eq!(stored.category, "very");
    // Lookups match the truncated form
    assert_eq!(engine.find_index_by_name("longe"), Some(0));
    assert_eq!(engine.find_index_by_name("longername"), None);
}

#[test]
fn test_add_find_remove_round_trip() {
    let mut engine = Engine::new();
    engine.add(item("rope", "tools", 2, 2)).unwrap();
    let count_before = engine.len();

    engine.add(item("flare", "signals", 3, 4)).unwrap();
    assert_eq!(engine.find_index_by_name("flare"), Some(1));

    let removed = engine.remove_by_name("flare").unwrap();
    assert_eq!(removed.name, "flare");
    assert_eq!(engine.len(), count_before);
    assert_eq!(engine.find_index_by_name("flare"), None);
}

// =============================================================================
// Command Routing Tests
// =============================================================================

#[test]
fn test_execute_add_and_list() {
    let mut engine = Engine::new();
    let reply = engine
        .execute(Command::Add {
            name: "medkit".to_string(),
            category: "medical".to_string(),
            quantity: 2,
            priority: 4,
        })
        .unwrap();
    assert_eq!(
        reply,
        Reply::Added {
            name: "medkit".to_string()
        }
    );

    let reply = engine.execute(Command::List).unwrap();
    match reply {
        Reply::Listing { items, sorted_by } => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "medkit");
            assert_eq!(sorted_by, None);
        }
        other => panic!("expected Listing, got {other:?}"),
    }
}

#[test]
fn test_execute_add_rejects_out_of_range_fields() {
    let mut engine = Engine::new();
    let result = engine.execute(Command::Add {
        name: "bogus".to_string(),
        category: "misc".to_string(),
        quantity: -1,
        priority: 3,
    });
    assert_eq!(
        result,
        Err(RucksackError::InvalidField {
            field: "quantity",
            value: -1,
        })
    );
    assert!(engine.is_empty());
}

#[test]
fn test_execute_sort_and_search_replies_carry_counters() {
    let mut engine = Engine::new();
    engine.add(item("medkit", "medical", 2, 3)).unwrap();
    engine.add(item("ammo", "weapons", 30, 5)).unwrap();

    let reply = engine
        .execute(Command::Sort {
            criterion: Criterion::Name,
        })
        .unwrap();
    match reply {
        Reply::Sorted {
            criterion,
            comparisons,
        } => {
            assert_eq!(criterion, Criterion::Name);
            assert_eq!(comparisons, 1);
        }
        other => panic!("expected Sorted, got {other:?}"),
    }

    let reply = engine
        .execute(Command::Search {
            name: "ammo".to_string(),
        })
        .unwrap();
    match reply {
        Reply::Found {
            item,
            index,
            comparisons,
        } => {
            assert_eq!(item.name, "ammo");
            assert_eq!(index, 0);
            assert!(comparisons >= 1);
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_backpack_scenario_sort_search_resort() {
    let mut engine = Engine::with_config(Config::builder().capacity(10).build());
    engine.add(item("Bandage", "medical", 5, 2)).unwrap();
    engine.add(item("Ammo", "weapons", 30, 5)).unwrap();
    engine.add(item("Medkit", "medical", 1, 3)).unwrap();

    // Sort by priority: highest first
    engine.sort(Criterion::Priority);
    let names: Vec<&str> = engine.snapshot().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ammo", "Medkit", "Bandage"]);

    // Sort by name: lexicographic ascending
    engine.sort(Criterion::Name);
    let names: Vec<&str> = engine.snapshot().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ammo", "Bandage", "Medkit"]);

    // Binary search now succeeds
    let (index, _) = engine.search_by_name("Medkit").unwrap();
    assert_eq!(engine.snapshot()[index].name, "Medkit");

    // Re-sorting by priority revokes the search precondition
    engine.sort(Criterion::Priority);
    assert_eq!(
        engine.search_by_name("Medkit"),
        Err(RucksackError::NotSorted)
    );
}
