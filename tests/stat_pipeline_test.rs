//! Integration test: Catalog -> Hero -> Derived Stats Pipeline
//!
//! Tests the full serving-shaped flow: parse static catalogs → look up a
//! hero → set level → fill the inventory → snapshot derived stats.
//! Mirrors how a request handler drives the engine.

use herocalc::derived_stats::calculate;
use herocalc::error::{CalcError, InventoryError};
use herocalc::{Catalog, DerivedStats};
use std::sync::Arc;

const HEROES_JSON: &str = r#"[
    {
        "name": "Axe",
        "primary_attribute": "STR",
        "base_str": 20, "str_gain": 2.5,
        "base_agi": 20, "agi_gain": 2.0,
        "base_int": 18, "int_gain": 1.6,
        "damage_min": 49, "damage_max": 53,
        "armor": 2, "speed": 310, "bat": 1.7
    },
    {
        "name": "Drow Ranger",
        "primary_attribute": "AGI",
        "base_str": 17, "str_gain": 1.9,
        "base_agi": 26, "agi_gain": 1.9,
        "base_int": 15, "int_gain": 1.4,
        "damage_min": 44, "damage_max": 55,
        "armor": 1, "speed": 300, "bat": 1.7
    }
]"#;

const ITEMS_YAML: &str = "\
name: Boots of Speed
movement_speed: 45
---
name: Boots of Travel
movement_speed: 100
---
name: Yasha
agility: 16
attack_speed: 15
movement_speed_multiplier: 0.1
---
name: Talisman of Evasion
evasion: 0.2
---
name: Heaven's Halberd
strength: 20
evasion: 0.25
---
name: Bracer
strength: 6
---
name: Vitality Booster
health: 250
";

fn catalog() -> Catalog {
    Catalog::from_static_data(HEROES_JSON, ITEMS_YAML).unwrap()
}

// =========================================================================
// Bare hero: formulas from base stats only
// =========================================================================

#[test]
fn test_level_one_hero_without_items() {
    let hero = catalog().spawn("Axe").unwrap();

    assert_eq!(hero.hp(), 530.0); // 150 + 20 * 19
    assert_eq!(hero.mana(), 234.0); // 18 * 13
    assert_eq!(hero.damage(), 51.0); // floor((49 + 53) / 2)
    assert_eq!(hero.armor(), 2.0);
    assert_eq!(hero.movement_speed(), 310.0);
    assert_eq!(hero.evasion(), 0.0);
    assert!((hero.spell_resistance() - 0.25).abs() < 1e-12);
}

#[test]
fn test_leveling_reallocates_attribute_points() {
    let mut hero = catalog().spawn("Axe").unwrap();

    hero.set_level(15);
    assert_eq!(hero.attr_levels(), 1);

    hero.set_level(25);
    assert_eq!(hero.attr_levels(), 10);

    hero.set_level(1);
    assert_eq!(hero.attr_levels(), 0);
}

// =========================================================================
// Item aggregation through hero queries
// =========================================================================

#[test]
fn test_additive_strength_items_raise_hp() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Axe").unwrap();
    hero.give(Arc::clone(catalog.item("Bracer").unwrap())).unwrap();
    hero.give(Arc::clone(catalog.item("Vitality Booster").unwrap()))
        .unwrap();

    // 150 + floor(20 + 6) * 19 + 250
    assert_eq!(hero.hp(), 150.0 + 26.0 * 19.0 + 250.0);
}

#[test]
fn test_evasion_items_stack_as_independent_probabilities() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Drow Ranger").unwrap();
    hero.give(Arc::clone(catalog.item("Talisman of Evasion").unwrap()))
        .unwrap();
    hero.give(Arc::clone(catalog.item("Heaven's Halberd").unwrap()))
        .unwrap();

    // 1 - 0.8 * 0.75 = 0.4, not 0.45
    assert!((hero.evasion() - 0.4).abs() < 1e-12);
}

#[test]
fn test_boots_do_not_stack_but_multipliers_do() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Drow Ranger").unwrap();
    hero.give(Arc::clone(catalog.item("Boots of Speed").unwrap()))
        .unwrap();
    hero.give(Arc::clone(catalog.item("Boots of Travel").unwrap()))
        .unwrap();
    hero.give(Arc::clone(catalog.item("Yasha").unwrap())).unwrap();

    // Best flat bonus only: (300 + 100) * 1.1 = 440.
    assert!((hero.movement_speed() - 440.0).abs() < 1e-9);
}

#[test]
fn test_movement_speed_clamps_to_exactly_522() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Drow Ranger").unwrap();
    hero.give(Arc::clone(catalog.item("Boots of Travel").unwrap()))
        .unwrap();
    for _ in 0..4 {
        hero.give(Arc::clone(catalog.item("Yasha").unwrap())).unwrap();
    }

    // (300 + 100) * 1.4 = 560 raw, capped.
    assert_eq!(hero.movement_speed(), 522.0);
}

// =========================================================================
// Inventory lifecycle
// =========================================================================

#[test]
fn test_seventh_item_rejected_then_clear_allows_six_more() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Axe").unwrap();
    let bracer = catalog.item("Bracer").unwrap();

    for _ in 0..6 {
        hero.give(Arc::clone(bracer)).unwrap();
    }
    assert_eq!(
        hero.give(Arc::clone(bracer)),
        Err(InventoryError::Full { capacity: 6 })
    );
    assert_eq!(hero.inventory().len(), 6);

    hero.clear_inventory();
    for _ in 0..6 {
        hero.give(Arc::clone(bracer)).unwrap();
    }
    assert_eq!(hero.inventory().len(), 6);
}

#[test]
fn test_inventory_preserves_insertion_order() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Axe").unwrap();
    hero.give(Arc::clone(catalog.item("Yasha").unwrap())).unwrap();
    hero.give(Arc::clone(catalog.item("Bracer").unwrap())).unwrap();

    assert_eq!(hero.inventory(), vec!["Yasha", "Bracer"]);
}

// =========================================================================
// Compute-all entry point (the serving operation)
// =========================================================================

#[test]
fn test_calculate_matches_manual_flow() {
    let catalog = catalog();

    let via_entry_point = calculate(&catalog, "Drow Ranger", 16, &["Yasha", "Boots of Speed"]);

    let mut hero = catalog.spawn("Drow Ranger").unwrap();
    hero.set_level(16);
    hero.give(Arc::clone(catalog.item("Yasha").unwrap())).unwrap();
    hero.give(Arc::clone(catalog.item("Boots of Speed").unwrap()))
        .unwrap();

    assert_eq!(via_entry_point, Ok(DerivedStats::from_hero(&hero)));
}

#[test]
fn test_calculate_reports_bad_names() {
    let catalog = catalog();
    assert_eq!(
        calculate(&catalog, "Techies", 1, &[]),
        Err(CalcError::HeroNotFound("Techies".to_string()))
    );
    assert_eq!(
        calculate(&catalog, "Axe", 1, &["Divine Rapier"]),
        Err(CalcError::ItemNotFound("Divine Rapier".to_string()))
    );
}

#[test]
fn test_calculate_propagates_inventory_overflow() {
    let catalog = catalog();
    let seven = ["Bracer"; 7];
    assert_eq!(
        calculate(&catalog, "Axe", 1, &seven),
        Err(CalcError::Inventory(InventoryError::Full { capacity: 6 }))
    );
}

#[test]
fn test_agility_carrier_end_to_end() {
    let catalog = catalog();
    let mut hero = catalog.spawn("Drow Ranger").unwrap();
    hero.set_level(11);
    hero.give(Arc::clone(catalog.item("Yasha").unwrap())).unwrap();

    // Gained agi: 10 levels * 1.9 + 16 from Yasha = 35; total 61.
    assert!((hero.total_agi() - 61.0).abs() < 1e-12);
    // IAS: floor(61) + 15 = 76.
    assert_eq!(hero.ias(), 76.0);
    // Attack interval and rate stay reciprocal.
    assert!((hero.attack_speed() * hero.attacks_per_second() - 1.0).abs() < 1e-12);
    // Damage follows gained agility for an AGI hero: floor(49 + 35).
    assert_eq!(hero.damage(), 84.0);
}
