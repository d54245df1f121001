// Arbitration and fleet-scan cursor behavior.
mod common;

use common::*;
use spacetraders_autopilot::commander::{SCAN_FALLBACK_PRIORITY, select_action};
use spacetraders_autopilot::models::PageMeta;
use spacetraders_autopilot::operations::ShipCommand;
use spacetraders_autopilot::pilots::{HaulerConfig, MinerConfig, Pilot, PilotAction};
use spacetraders_autopilot::refresh::FleetScanner;
use spacetraders_autopilot::state::GameState;

const SITE: &str = "X1-RV45-EC5X";
const MARKET: &str = "X1-RV45-H63";

fn extract_action(ship_symbol: &str, priority: i32) -> PilotAction {
    PilotAction {
        priority,
        command: ShipCommand::Extract { ship_symbol: ship_symbol.to_string() },
    }
}

#[test]
fn empty_candidates_fall_through_to_the_scan() {
    assert!(select_action(&[]).is_none());
}

#[test]
fn highest_priority_wins() {
    let candidates = vec![
        extract_action("A", 38),
        extract_action("B", 50),
        extract_action("C", 40),
    ];
    let winner = select_action(&candidates).unwrap();
    assert_eq!(winner.priority, 50);
    assert_eq!(winner.command, ShipCommand::Extract { ship_symbol: "B".to_string() });
}

#[test]
fn first_candidate_wins_a_tie() {
    let candidates = vec![
        extract_action("A", 49),
        extract_action("B", 49),
        extract_action("C", 49),
    ];
    let winner = select_action(&candidates).unwrap();
    assert_eq!(winner.command, ShipCommand::Extract { ship_symbol: "A".to_string() });
}

#[test]
fn candidates_below_the_fallback_lose_to_it() {
    let candidates = vec![extract_action("A", -5)];
    let winner = select_action(&candidates).unwrap();
    assert!(winner.priority < SCAN_FALLBACK_PRIORITY);
    // The commander only executes winners at or above the fallback line;
    // anything below it cedes the cycle to the scan.
}

#[test]
fn plans_are_pure_functions_of_the_snapshot() {
    let state = GameState::new();
    state.upsert(test_ship("HAULER-1", SITE, "IN_ORBIT"));
    state.upsert(with_mount(
        with_cargo(test_ship("MINER-1", SITE, "IN_ORBIT"), &[("IRON_ORE", 8)]),
        "MOUNT_MINING_LASER_I",
    ));
    state.upsert(with_mount(
        with_cargo(test_ship("MINER-2", SITE, "IN_ORBIT"), &[("IRON_ORE", 3)]),
        "MOUNT_MINING_LASER_I",
    ));

    let pilots = vec![
        Pilot::Miner(MinerConfig {
            ship_symbol: "MINER-1".to_string(),
            site: SITE.to_string(),
            allowed_goods: vec!["IRON_ORE".to_string()],
        }),
        Pilot::Hauler(HaulerConfig {
            ship_symbol: "HAULER-1".to_string(),
            source: SITE.to_string(),
            destination: MARKET.to_string(),
            sellable_goods: vec!["IRON_ORE".to_string()],
            fuel_threshold: 24,
            load_threshold: 37,
        }),
    ];

    let first: Vec<PilotAction> = pilots.iter().flat_map(|pilot| pilot.plan(&state)).collect();
    let second: Vec<PilotAction> = pilots.iter().flat_map(|pilot| pilot.plan(&state)).collect();
    assert_eq!(first, second, "same snapshot must produce the same candidates");

    assert_eq!(select_action(&first), select_action(&second));
}

#[test]
fn earlier_registered_pilot_wins_across_strategies() {
    let state = GameState::new();
    // Both miners are off-site, so both propose a priority-49 navigate.
    state.upsert(test_ship("MINER-1", "X1-RV45-A1", "IN_ORBIT"));
    state.upsert(test_ship("MINER-2", "X1-RV45-A1", "IN_ORBIT"));

    let miner = |symbol: &str| {
        Pilot::Miner(MinerConfig {
            ship_symbol: symbol.to_string(),
            site: SITE.to_string(),
            allowed_goods: vec!["IRON_ORE".to_string()],
        })
    };

    let pilots = vec![miner("MINER-1"), miner("MINER-2")];
    let candidates: Vec<PilotAction> = pilots.iter().flat_map(|pilot| pilot.plan(&state)).collect();
    let winner = select_action(&candidates).unwrap();
    assert_eq!(
        winner.command,
        ShipCommand::Navigate {
            ship_symbol: "MINER-1".to_string(),
            waypoint_symbol: SITE.to_string(),
        }
    );
}

#[test]
fn scan_cursor_walks_pages_and_wraps() {
    let mut scanner = FleetScanner::new();
    let meta = |page| PageMeta { total: 45, page, limit: 20 };

    assert_eq!(scanner.next_page(), 1);
    scanner.note_meta(&meta(1));
    assert_eq!(scanner.max_pages(), 3);

    assert_eq!(scanner.next_page(), 2);
    scanner.note_meta(&meta(2));
    assert_eq!(scanner.next_page(), 3);
    scanner.note_meta(&meta(3));

    // Past the bound the cursor wraps back to the first page.
    assert_eq!(scanner.next_page(), 1);
}

#[test]
fn scan_cursor_stays_put_when_a_fetch_fails() {
    let mut scanner = FleetScanner::new();
    scanner.note_meta(&PageMeta { total: 45, page: 1, limit: 20 });
    assert_eq!(scanner.next_page(), 2);

    // A failed fetch never reaches note_meta, so the same page is asked for
    // again on the next cycle.
    assert_eq!(scanner.next_page(), 2);
}

#[test]
fn empty_fleet_keeps_a_single_page_bound() {
    let mut scanner = FleetScanner::new();
    scanner.note_meta(&PageMeta { total: 0, page: 1, limit: 20 });
    assert_eq!(scanner.max_pages(), 1);
    assert_eq!(scanner.next_page(), 1);
}

#[test]
fn shrinking_fleet_pulls_the_cursor_back_into_range() {
    let mut scanner = FleetScanner::new();
    scanner.note_meta(&PageMeta { total: 60, page: 1, limit: 20 });
    scanner.note_meta(&PageMeta { total: 60, page: 2, limit: 20 });
    assert_eq!(scanner.next_page(), 3);

    // The server now reports fewer ships than the cursor position.
    scanner.note_meta(&PageMeta { total: 21, page: 3, limit: 20 });
    assert_eq!(scanner.max_pages(), 2);
    assert_eq!(scanner.next_page(), 1);
}
