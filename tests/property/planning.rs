// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Migration Planning
//!
//! Labels are pure functions of item types and workspace composition, so
//! they must be deterministic, order-insensitive and monotone in the item
//! set.

use fabric_inventory::classify::{
    assign_wave, classify, classify_workspace, score, ComplexityThresholds, PlanningConfig,
};
use fabric_inventory::domain::{Complexity, Item, ItemType, Movability, Wave, Workspace};
use fabric_inventory::inventory::Source;
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Any known item type, or an unrecognized one
fn item_type() -> impl Strategy<Value = ItemType> {
    prop_oneof![
        9 => proptest::sample::select(ItemType::KNOWN.to_vec()),
        1 => "[A-Z][a-zA-Z]{3,12}Thing".prop_map(ItemType::from),
    ]
}

fn item_types(max: usize) -> impl Strategy<Value = Vec<ItemType>> {
    prop::collection::vec(item_type(), 0..max)
}

fn thresholds() -> impl Strategy<Value = ComplexityThresholds> {
    (1usize..40, 1usize..40).prop_map(|(medium, extra)| ComplexityThresholds {
        medium_item_count: medium,
        high_item_count: medium + extra,
    })
}

fn movability() -> impl Strategy<Value = Movability> {
    prop_oneof![Just(Movability::Movable), Just(Movability::NonMovable)]
}

fn complexity() -> impl Strategy<Value = Complexity> {
    prop_oneof![
        Just(Complexity::Low),
        Just(Complexity::Medium),
        Just(Complexity::High)
    ]
}

fn workspace(types: &[ItemType]) -> Workspace {
    Workspace::new("ws-prop", "Property Workspace", "cap-prop").with_items(
        types
            .iter()
            .enumerate()
            .map(|(i, t)| Item::new(format!("item-{}", i), format!("Item {}", i), t.clone())),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Every item type gets exactly one movability, every time
    #[test]
    fn prop_classify_is_deterministic(t in item_type()) {
        prop_assert_eq!(classify(&t), classify(&t));
    }

    /// Property: Unrecognized types are never treated as movable
    #[test]
    fn prop_unrecognized_is_non_movable(t in item_type()) {
        if !t.is_recognized() {
            prop_assert_eq!(classify(&t), Movability::NonMovable);
        }
    }

    /// Property: Score ignores item order
    #[test]
    fn prop_score_is_order_insensitive(types in item_types(60), th in thresholds()) {
        let mut reversed = types.clone();
        reversed.reverse();
        prop_assert_eq!(score(&types, &th), score(&reversed, &th));
    }

    /// Property: Adding items never lowers the score
    #[test]
    fn prop_score_is_monotone(
        base in item_types(40),
        extra in item_types(20),
        th in thresholds()
    ) {
        let mut grown = base.clone();
        grown.extend(extra);
        prop_assert!(score(&grown, &th) >= score(&base, &th));
    }

    /// Property: A non-movable item forces at least Medium
    #[test]
    fn prop_non_movable_forces_medium(types in item_types(10), th in thresholds()) {
        if types.iter().any(|t| classify(t) == Movability::NonMovable) {
            prop_assert!(score(&types, &th) >= Complexity::Medium);
        }
    }

    /// Property: Movable items always land in Wave 1
    #[test]
    fn prop_movable_is_wave_one(c in complexity()) {
        prop_assert_eq!(assign_wave(Movability::Movable, c), Wave::One);
    }

    /// Property: Wave never decreases as complexity grows
    #[test]
    fn prop_wave_monotone_in_complexity(m in movability(), a in complexity(), b in complexity()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(assign_wave(m, low) <= assign_wave(m, high));
    }

    /// Property: Workspace wave is the latest item wave
    #[test]
    fn prop_workspace_wave_is_max_item_wave(types in item_types(30)) {
        let ws = workspace(&types);
        let (classified, warnings) =
            classify_workspace(&ws, Source::Primary, &PlanningConfig::default());

        let latest = classified.items.iter().map(|i| i.wave).max().unwrap_or(Wave::One);
        prop_assert_eq!(classified.wave, latest);
        prop_assert_eq!(classified.items.len(), types.len());
        prop_assert_eq!(
            warnings.len(),
            types.iter().filter(|t| !t.is_recognized()).count()
        );
    }
}

// ============================================================================
// Standard Unit Tests
// ============================================================================

#[test]
fn test_every_known_type_has_a_category_and_label() {
    for t in ItemType::KNOWN {
        assert!(t.is_recognized());
        assert!(!t.display_name().is_empty());
        let _ = classify(&t);
    }
}
