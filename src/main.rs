// SpaceTraders Fleet Autopilot - Main Entry Point
use std::sync::Arc;

use clap::Parser;

use spacetraders_autopilot::commander::{Commander, load_agent_token};
use spacetraders_autopilot::config::AutopilotConfig;
use spacetraders_autopilot::output;
use spacetraders_autopilot::state::GameState;
use spacetraders_autopilot::SpaceTradersClient;

#[derive(Parser)]
#[command(about = "Autonomous mining and hauling fleet for SpaceTraders")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "autopilot.toml")]
    config: String,
    /// Increase output verbosity (-v shows debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    output::set_verbosity_level(1 + cli.verbose);

    println!("🚀 SpaceTraders Fleet Autopilot starting...");

    let config = AutopilotConfig::load_or_create(&cli.config)?;
    config.validate()?;
    config.print_summary();

    let token = load_agent_token()?;
    let client = SpaceTradersClient::new(token);

    // Without an initial ship list no pilot can do anything; a failed
    // preload ends the process here.
    let state = match GameState::preload(&client).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("❌ Fleet preload failed: {}", e);
            return Err(e);
        }
    };

    let commander = Commander::new(client, Arc::clone(&state), &config);

    println!("⚠️  Running until stopped - press Ctrl+C to exit");
    tokio::select! {
        result = commander.run() => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Shutdown requested - stopping the command loop");
            Ok(())
        }
    }
}
