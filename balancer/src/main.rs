use std::path::PathBuf;

use balancer::{format_report, RosterConfig};
use clap::Parser;
use teamsplit::{best_splits, visualize_pitch, Lineup};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the roster JSON file
    roster: PathBuf,

    /// How many of the best splits to show
    #[arg(short, long, default_value_t = 5)]
    num_results: usize,

    /// Attackers per team, overriding the roster file
    #[arg(long)]
    attackers: Option<usize>,

    /// Defenders per team, overriding the roster file
    #[arg(long)]
    defenders: Option<usize>,

    /// Do not draw the pitch diagram of the best split
    #[arg(long, default_value_t = false)]
    no_pitch: bool,

    /// Print the ranked splits as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = RosterConfig::load(&args.roster)?.with_overrides(args.attackers, args.defenders);
    let roster = config.players;
    let target = config.formation;

    info!(
        num_field_players = roster.field_players().len(),
        per_team = roster.field_players_per_team(),
        %target,
        "Generating combinations"
    );
    let splits = best_splits(&roster, target, args.num_results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&splits)?);
        return Ok(());
    }
    print!("{}", format_report(&splits, args.num_results));

    if args.no_pitch {
        return Ok(());
    }
    if let Some(best) = splits.first() {
        println!("\n--- Visualizing the best balanced and viable teams ---\n");
        let lineup_a = Lineup::assign(&best.team_a, target);
        let lineup_b = Lineup::assign(&best.team_b, target);
        println!("{}", visualize_pitch(best, &lineup_a, &lineup_b));
    } else {
        println!("\nCannot visualize - no viable team configurations were found.");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
