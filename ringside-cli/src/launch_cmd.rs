//! Launch commands - build and print launch configurations
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_versus(), run_solo(), run_round_robin(), run_plan() - orchestration
//! - Level 2: build_configurator(), configure(), report_*()
//! - Level 3: print_config_text()
//! - Level 4: argument structs and formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ringside_core::{LaunchConfig, Side};
use ringside_launch::{
    plan_batch, BatchPlan, Configured, DirectoryDiscovery, InMemoryRegistry, LaunchConfigurator,
    MatchRequest, RosterSettings, RosterStatus, RoundRobinCursor, TracingSink,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

/// Arguments shared by every launch command
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// P1 character
    #[arg(long, default_value = "ZEN")]
    pub p1_character: String,

    /// P2 character
    #[arg(long, default_value = "ZEN")]
    pub p2_character: String,

    /// Number of matches in the batch
    #[arg(long, default_value = "1")]
    pub repeat: u32,

    /// Directory scanned for packaged agents
    #[arg(long, value_name = "DIR", default_value = "./data/ai")]
    pub agent_dir: PathBuf,

    /// Agent package file extension
    #[arg(long, default_value = "jar")]
    pub extension: String,

    /// Agent registered at runtime (repeatable, appended after discovered agents)
    #[arg(long = "register", value_name = "AGENT")]
    pub registered: Vec<String>,

    /// Output configuration as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct VersusArgs {
    /// P1 agent
    #[arg(long)]
    pub p1_agent: String,

    /// P2 agent
    #[arg(long)]
    pub p2_agent: String,
}

#[derive(Args, Debug)]
pub struct SoloArgs {
    /// Agent controlling both sides
    #[arg(long)]
    pub agent: String,
}

#[derive(Args, Debug)]
pub struct RoundRobinArgs {
    /// Roster index of the P1 agent
    #[arg(long, default_value = "0")]
    pub p1_index: usize,

    /// Roster index of the P2 agent
    #[arg(long, default_value = "1")]
    pub p2_index: usize,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Roster index of the first P1 agent
    #[arg(long, default_value = "0")]
    pub start_p1: usize,

    /// Roster index of the first P2 agent
    #[arg(long, default_value = "1")]
    pub start_p2: usize,
}

/// JSON output for a single configure
#[derive(Serialize)]
struct ConfigReport<'a> {
    ready: bool,
    config: &'a LaunchConfig,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Configure a two-agent match
pub fn run_versus(common: CommonArgs, args: VersusArgs) -> Result<()> {
    let request = MatchRequest::two_agent(
        &common.p1_character,
        &common.p2_character,
        args.p1_agent,
        args.p2_agent,
        common.repeat,
    );
    let configured = configure(&common, &request, RoundRobinCursor::new())?;
    report_config(&configured, common.json)
}

/// Configure one agent driving both sides
pub fn run_solo(common: CommonArgs, args: SoloArgs) -> Result<()> {
    let request = MatchRequest::single_agent(
        &common.p1_character,
        &common.p2_character,
        args.agent,
        common.repeat,
    );
    let configured = configure(&common, &request, RoundRobinCursor::new())?;
    report_config(&configured, common.json)
}

/// Configure the round-robin pairing at the given cursor
pub fn run_round_robin(common: CommonArgs, args: RoundRobinArgs) -> Result<()> {
    let request =
        MatchRequest::round_robin(&common.p1_character, &common.p2_character, common.repeat);
    let cursor = RoundRobinCursor::at(args.p1_index, args.p2_index);
    let configured = configure(&common, &request, cursor)?;

    if let RosterStatus::Insufficient { available } = configured.roster {
        tracing::warn!(
            "Only {} agent(s) found in {} (plus registered); agents left unset",
            available,
            common.agent_dir.display()
        );
    }

    report_config(&configured, common.json)
}

/// Plan every pairing of a round-robin batch
pub fn run_plan(common: CommonArgs, args: PlanArgs) -> Result<()> {
    let request =
        MatchRequest::round_robin(&common.p1_character, &common.p2_character, common.repeat);
    let configurator = build_configurator(&common);
    let mut cursor = RoundRobinCursor::at(args.start_p1, args.start_p2);

    let plan = plan_batch(&configurator, &request, &mut cursor).with_context(|| {
        format!(
            "Failed to plan round-robin batch from {}",
            common.agent_dir.display()
        )
    })?;

    report_plan(&plan, common.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configurator over the directory and registered agents named on the command line
fn build_configurator(common: &CommonArgs) -> LaunchConfigurator {
    let settings = RosterSettings::default()
        .with_agent_dir(common.agent_dir.clone())
        .with_extension(&common.extension);
    let registry: InMemoryRegistry = common.registered.iter().cloned().collect();

    LaunchConfigurator::new(DirectoryDiscovery, registry, TracingSink, settings)
}

fn configure(
    common: &CommonArgs,
    request: &MatchRequest,
    cursor: RoundRobinCursor,
) -> Result<Configured> {
    let configurator = build_configurator(common);

    tracing::info!(
        "Configuring {} launch: {} vs {} ({} match(es))",
        request.mode.label(),
        request.character_name(Side::P1),
        request.character_name(Side::P2),
        request.repeat_count()
    );

    configurator
        .configure(request, &cursor)
        .with_context(|| format!("Failed to configure {} launch", request.mode.label()))
}

fn report_config(configured: &Configured, json: bool) -> Result<()> {
    if json {
        let report = ConfigReport {
            ready: configured.is_ready(),
            config: &configured.config,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_config_text(&configured.config);
    }
    Ok(())
}

fn report_plan(plan: &BatchPlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&plan.configs)?);
        return Ok(());
    }

    println!("\n=== ROUND-ROBIN PLAN ===");
    println!("Pairings: {}  Matches: {}", plan.len(), plan.total_matches());
    for (i, config) in plan.configs.iter().enumerate() {
        println!(
            "{:>3}. {} vs {}",
            i + 1,
            agent_label(config, Side::P1),
            agent_label(config, Side::P2)
        );
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn print_config_text(config: &LaunchConfig) {
    println!("\n=== LAUNCH CONFIGURATION ===");
    for side in Side::BOTH {
        println!(
            "{:?}: character={} device={:?} agent={}",
            side,
            config.state.character_name(side),
            config.state.device_type(side),
            agent_label(config, side)
        );
    }
    println!("Repeat count: {}", config.state.repeat_count);
    println!(
        "Automation: {}  Single-agent: {}  Round-robin: {}",
        on_off(config.flags.automation_enabled),
        on_off(config.flags.single_agent_mode_enabled),
        on_off(config.flags.round_robin_mode_enabled)
    );
    if config.flags.round_robin_mode_enabled {
        println!("Roster ({}): {}", config.roster.len(), config.roster.join(", "));
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING UTILITIES
// ============================================================================

fn agent_label(config: &LaunchConfig, side: Side) -> &str {
    config
        .state
        .agent_name(side)
        .or(config.state.solo_agent_name.as_deref())
        .unwrap_or("<unset>")
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
