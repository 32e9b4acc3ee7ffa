//! Ringside CLI - Command-line interface
//!
//! Commands:
//! - versus: Configure a two-agent match
//! - solo: Configure a single agent driving both sides
//! - round-robin: Configure the current round-robin pairing
//! - plan: List every configuration of a round-robin batch

mod launch_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use launch_cmd::{CommonArgs, PlanArgs, RoundRobinArgs, SoloArgs, VersusArgs};

#[derive(Parser)]
#[command(name = "ringside")]
#[command(about = "Fighting-game match launch configurator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Two agents, one per side
    Versus {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: VersusArgs,
    },
    /// One agent driving both sides
    Solo {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: SoloArgs,
    },
    /// Current pairing of a round-robin over all available agents
    RoundRobin {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: RoundRobinArgs,
    },
    /// Every pairing of a round-robin batch
    Plan {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: PlanArgs,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Versus { common, args } => launch_cmd::run_versus(common, args),
        Commands::Solo { common, args } => launch_cmd::run_solo(common, args),
        Commands::RoundRobin { common, args } => launch_cmd::run_round_robin(common, args),
        Commands::Plan { common, args } => launch_cmd::run_plan(common, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("ringside").chain(args.iter().copied()))
            .expect("Arguments should parse")
            .command
    }

    #[test]
    fn test_parse_versus() {
        let command = parse(&[
            "versus",
            "--p1-character",
            "ZEN",
            "--p2-character",
            "GARNET",
            "--p1-agent",
            "KickAI",
            "--p2-agent",
            "ShotoAI",
            "--repeat",
            "3",
        ]);
        match command {
            Commands::Versus { common, args } => {
                assert_eq!(common.p1_character, "ZEN");
                assert_eq!(common.p2_character, "GARNET");
                assert_eq!(common.repeat, 3);
                assert_eq!(args.p1_agent, "KickAI");
                assert_eq!(args.p2_agent, "ShotoAI");
                assert!(!common.json);
            }
            _ => panic!("Expected versus command"),
        }
    }

    #[test]
    fn test_parse_versus_requires_agents() {
        let result = Cli::try_parse_from(["ringside", "versus", "--p1-agent", "KickAI"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_solo_defaults() {
        match parse(&["solo", "--agent", "MirrorAI", "--json"]) {
            Commands::Solo { common, args } => {
                assert_eq!(args.agent, "MirrorAI");
                assert_eq!(common.p1_character, "ZEN");
                assert_eq!(common.repeat, 1);
                assert_eq!(common.agent_dir, PathBuf::from("./data/ai"));
                assert_eq!(common.extension, "jar");
                assert!(common.registered.is_empty());
                assert!(common.json);
            }
            _ => panic!("Expected solo command"),
        }
    }

    #[test]
    fn test_parse_round_robin_with_registered_agents() {
        match parse(&[
            "round-robin",
            "--agent-dir",
            "/tmp/agents",
            "--register",
            "Python1",
            "--register",
            "Python2",
            "--p1-index",
            "2",
            "--p2-index",
            "0",
        ]) {
            Commands::RoundRobin { common, args } => {
                assert_eq!(common.agent_dir, PathBuf::from("/tmp/agents"));
                assert_eq!(common.registered, vec!["Python1", "Python2"]);
                assert_eq!(args.p1_index, 2);
                assert_eq!(args.p2_index, 0);
            }
            _ => panic!("Expected round-robin command"),
        }
    }

    #[test]
    fn test_parse_plan() {
        match parse(&["plan", "--extension", "zip", "--start-p1", "1", "--start-p2", "0"]) {
            Commands::Plan { common, args } => {
                assert_eq!(common.extension, "zip");
                assert_eq!(args.start_p1, 1);
                assert_eq!(args.start_p2, 0);
            }
            _ => panic!("Expected plan command"),
        }
    }
}
