//! Ringside Launch - Turning a match request into a launch configuration
//!
//! This crate provides the match-batch setup layer:
//! - Match requests for the three launch modes
//! - Agent roster discovery (packaged agents on disk + runtime registry)
//! - Round-robin pairing cursor
//! - The launch configurator and batch planning
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: plan_batch (orchestration)
//! - Level 2: LaunchConfigurator::configure (phases)
//! - Level 3: AgentRoster::collect, cursor advancement (steps)
//! - Level 4: requests, settings, diagnostics

mod batch;
mod configurator;
mod cursor;
mod diagnostics;
mod request;
mod roster;

pub use batch::{plan_batch, BatchPlan};
pub use configurator::{Configured, LaunchConfigurator, RosterStatus, INSUFFICIENT_ROSTER_MESSAGE};
pub use cursor::{MatchBatchDriver, RoundRobinCursor};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use request::{LaunchMode, MatchRequest};
pub use roster::{
    AgentDiscovery, AgentRegistry, AgentRoster, DirectoryDiscovery, InMemoryRegistry,
    RosterSettings,
};
