// Merge semantics of the fleet cache: idempotence, field preservation, and
// the cargo bookkeeping invariant.
mod common;

use common::*;
use spacetraders_autopilot::models::ship::{ShipCargo, ShipFuel, ShipNav, ShipRoute};
use spacetraders_autopilot::state::{GameState, ShipPatch, apply_cargo_delta};

fn orbit_nav(waypoint: &str) -> ShipNav {
    ShipNav {
        system_symbol: "X1-RV45".to_string(),
        waypoint_symbol: waypoint.to_string(),
        route: ShipRoute {
            arrival: "2020-01-01T00:00:00.000Z".to_string(),
        },
        status: "IN_ORBIT".to_string(),
    }
}

#[test]
fn merge_is_idempotent() {
    let state = GameState::new();
    state.upsert(test_ship("HAULER-1", "X1-RV45-H63", "DOCKED"));

    let patch = ShipPatch {
        fuel: Some(ShipFuel { current: 123, capacity: 400 }),
        nav: Some(orbit_nav("X1-RV45-EC5X")),
        ..Default::default()
    };

    state.apply("HAULER-1", patch.clone()).unwrap();
    let once = state.get("HAULER-1").unwrap();

    state.apply("HAULER-1", patch).unwrap();
    let twice = state.get("HAULER-1").unwrap();

    assert_eq!(once, twice, "applying the same patch twice changed the state");
}

#[test]
fn disjoint_patches_apply_in_either_order() {
    let fuel_patch = ShipPatch {
        fuel: Some(ShipFuel { current: 10, capacity: 400 }),
        ..Default::default()
    };
    let cargo_patch = ShipPatch {
        cargo: Some(ShipCargo {
            capacity: 40,
            units: 5,
            inventory: vec![cargo_item("IRON_ORE", 5)],
        }),
        ..Default::default()
    };

    let forward = GameState::new();
    forward.upsert(test_ship("MINER-1", "X1-RV45-EC5X", "IN_ORBIT"));
    forward.apply("MINER-1", fuel_patch.clone()).unwrap();
    forward.apply("MINER-1", cargo_patch.clone()).unwrap();

    let reverse = GameState::new();
    reverse.upsert(test_ship("MINER-1", "X1-RV45-EC5X", "IN_ORBIT"));
    reverse.apply("MINER-1", cargo_patch).unwrap();
    reverse.apply("MINER-1", fuel_patch).unwrap();

    assert_eq!(forward.get("MINER-1").unwrap(), reverse.get("MINER-1").unwrap());
}

#[test]
fn patch_leaves_absent_fields_untouched() {
    let state = GameState::new();
    let original = with_cargo(test_ship("MINER-1", "X1-RV45-EC5X", "DOCKED"), &[("IRON_ORE", 7)]);
    state.upsert(original.clone());

    state
        .apply("MINER-1", ShipPatch {
            fuel: Some(ShipFuel { current: 50, capacity: 400 }),
            ..Default::default()
        })
        .unwrap();

    let updated = state.get("MINER-1").unwrap();
    assert_eq!(updated.fuel.current, 50);
    assert_eq!(updated.cargo, original.cargo);
    assert_eq!(updated.nav, original.nav);
    assert_eq!(updated.cooldown, original.cooldown);
}

#[test]
fn upsert_inserts_then_overwrites() {
    let state = GameState::new();
    assert!(state.get("MINER-1").is_none());

    state.upsert(test_ship("MINER-1", "X1-RV45-EC5X", "DOCKED"));
    assert!(state.contains("MINER-1"));

    let mut moved = test_ship("MINER-1", "X1-RV45-H63", "IN_ORBIT");
    moved.fuel.current = 9;
    state.upsert(moved);

    let ship = state.get("MINER-1").unwrap();
    assert_eq!(ship.nav.waypoint_symbol, "X1-RV45-H63");
    assert_eq!(ship.fuel.current, 9);
}

#[test]
fn patch_for_unknown_ship_is_an_error() {
    let state = GameState::new();
    let result = state.apply("GHOST-1", ShipPatch {
        fuel: Some(ShipFuel { current: 1, capacity: 1 }),
        ..Default::default()
    });
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("GHOST-1"));
}

#[test]
fn credit_for_unknown_ship_is_an_error() {
    let state = GameState::new();
    assert!(state.credit_cargo("GHOST-1", "IRON_ORE", 3).is_err());
}

#[test]
fn cargo_delta_keeps_units_in_sync_with_inventory() {
    let mut cargo = ShipCargo {
        capacity: 40,
        units: 8,
        inventory: vec![cargo_item("IRON_ORE", 5), cargo_item("ICE_WATER", 3)],
    };

    apply_cargo_delta(&mut cargo, "IRON_ORE", 4);
    apply_cargo_delta(&mut cargo, "ICE_WATER", -3);
    apply_cargo_delta(&mut cargo, "QUARTZ_SAND", 2);

    let inventory_total: i32 = cargo.inventory.iter().map(|item| item.units).sum();
    assert_eq!(cargo.units, inventory_total);
    assert_eq!(cargo.units, 11);
    assert!(
        cargo.inventory.iter().all(|item| item.units > 0),
        "zero-unit entries must be removed, not retained"
    );
    assert!(!cargo.inventory.iter().any(|item| item.symbol == "ICE_WATER"));
}

#[test]
fn cargo_delta_never_duplicates_a_symbol() {
    let mut cargo = ShipCargo { capacity: 40, units: 0, inventory: Vec::new() };

    apply_cargo_delta(&mut cargo, "IRON_ORE", 3);
    apply_cargo_delta(&mut cargo, "IRON_ORE", 2);

    assert_eq!(cargo.inventory.len(), 1);
    assert_eq!(cargo.inventory[0].units, 5);
    assert_eq!(cargo.units, 5);
}

#[test]
fn transfer_conserves_units_across_both_ships() {
    let state = GameState::new();
    state.upsert(with_cargo(
        test_ship("MINER-1", "X1-RV45-EC5X", "IN_ORBIT"),
        &[("IRON_ORE", 8), ("QUARTZ_SAND", 3)],
    ));
    state.upsert(with_cargo(
        test_ship("HAULER-1", "X1-RV45-EC5X", "IN_ORBIT"),
        &[("IRON_ORE", 2)],
    ));

    // The remote transfer response only covers the sending ship; mirror the
    // controller's merge: patch the from side, credit the to side.
    let mut from_cargo = state.get("MINER-1").unwrap().cargo;
    apply_cargo_delta(&mut from_cargo, "IRON_ORE", -8);
    state
        .apply("MINER-1", ShipPatch { cargo: Some(from_cargo), ..Default::default() })
        .unwrap();
    state.credit_cargo("HAULER-1", "IRON_ORE", 8).unwrap();

    let miner = state.get("MINER-1").unwrap();
    let hauler = state.get("HAULER-1").unwrap();

    assert!(!miner.cargo.inventory.iter().any(|item| item.symbol == "IRON_ORE"));
    assert_eq!(miner.cargo.units, 3);

    let hauler_iron = hauler.cargo.inventory.iter().find(|item| item.symbol == "IRON_ORE").unwrap();
    assert_eq!(hauler_iron.units, 10);
    assert_eq!(hauler.cargo.units, 10);

    let total_iron: i32 = [&miner, &hauler]
        .iter()
        .flat_map(|ship| ship.cargo.inventory.iter())
        .filter(|item| item.symbol == "IRON_ORE")
        .map(|item| item.units)
        .sum();
    assert_eq!(total_iron, 10, "transfer must conserve total units of the symbol");
}

#[test]
fn transfer_creates_the_receiving_entry_when_absent() {
    let state = GameState::new();
    state.upsert(test_ship("HAULER-1", "X1-RV45-EC5X", "IN_ORBIT"));

    state.credit_cargo("HAULER-1", "COPPER_ORE", 6).unwrap();

    let hauler = state.get("HAULER-1").unwrap();
    assert_eq!(hauler.cargo.units, 6);
    assert_eq!(hauler.cargo.inventory.len(), 1);
    assert_eq!(hauler.cargo.inventory[0].symbol, "COPPER_ORE");
}

#[test]
fn snapshot_is_sorted_by_symbol() {
    let state = GameState::new();
    state.upsert(test_ship("ZETA-9", "X1-RV45-EC5X", "DOCKED"));
    state.upsert(test_ship("ALPHA-1", "X1-RV45-EC5X", "DOCKED"));
    state.upsert(test_ship("MIKE-5", "X1-RV45-EC5X", "DOCKED"));

    let symbols: Vec<String> = state.snapshot().into_iter().map(|ship| ship.symbol).collect();
    assert_eq!(symbols, vec!["ALPHA-1", "MIKE-5", "ZETA-9"]);
}
