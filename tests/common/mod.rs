#![allow(dead_code)]
// Shared builders for in-memory fleet fixtures
use spacetraders_autopilot::models::ship::*;

pub fn test_ship(symbol: &str, waypoint: &str, status: &str) -> Ship {
    Ship {
        symbol: symbol.to_string(),
        nav: ShipNav {
            system_symbol: "X1-RV45".to_string(),
            waypoint_symbol: waypoint.to_string(),
            route: ShipRoute {
                arrival: "2020-01-01T00:00:00.000Z".to_string(),
            },
            status: status.to_string(),
        },
        cooldown: ShipCooldown {
            total_seconds: 0,
            remaining_seconds: 0,
        },
        mounts: Vec::new(),
        cargo: ShipCargo {
            capacity: 40,
            units: 0,
            inventory: Vec::new(),
        },
        fuel: ShipFuel {
            current: 400,
            capacity: 400,
        },
    }
}

pub fn cargo_item(symbol: &str, units: i32) -> CargoItem {
    CargoItem {
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        description: String::new(),
        units,
    }
}

pub fn with_cargo(mut ship: Ship, items: &[(&str, i32)]) -> Ship {
    ship.cargo.inventory = items.iter().map(|(symbol, units)| cargo_item(symbol, *units)).collect();
    ship.cargo.units = items.iter().map(|(_, units)| units).sum();
    ship
}

pub fn with_cooldown(mut ship: Ship, remaining_seconds: i32, total_seconds: i32) -> Ship {
    ship.cooldown = ShipCooldown {
        total_seconds,
        remaining_seconds,
    };
    ship
}

pub fn with_fuel(mut ship: Ship, current: i32) -> Ship {
    ship.fuel.current = current;
    ship
}

pub fn with_mount(mut ship: Ship, mount_symbol: &str) -> Ship {
    ship.mounts.push(ShipMount {
        symbol: mount_symbol.to_string(),
        strength: Some(10),
    });
    ship
}
