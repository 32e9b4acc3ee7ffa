//! Batch planning - every configuration a match batch will run
//!
//! Level 1 - Orchestration

use ringside_core::{LaunchConfig, Result};

use crate::configurator::{LaunchConfigurator, RosterStatus};
use crate::cursor::{MatchBatchDriver, RoundRobinCursor};
use crate::diagnostics::DiagnosticSink;
use crate::request::MatchRequest;
use crate::roster::{AgentDiscovery, AgentRegistry};

/// Ordered launch configurations for a batch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchPlan {
    /// One entry per pairing; each is run `repeat_count` times
    pub configs: Vec<LaunchConfig>,
}

impl BatchPlan {
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Total matches, counting repeats
    pub fn total_matches(&self) -> u64 {
        self.configs
            .iter()
            .map(|config| u64::from(config.state.repeat_count))
            .sum()
    }
}

/// Plan a whole batch (Level 1 orchestration)
///
/// Two-agent and single-agent requests yield a single configuration.
/// Round-robin requests are configured once per pairing, advancing the
/// cursor in between, until the cursor runs out of pairings. A roster too
/// small to pair yields an empty plan.
pub fn plan_batch<D, R, S>(
    configurator: &LaunchConfigurator<D, R, S>,
    request: &MatchRequest,
    cursor: &mut impl MatchBatchDriver,
) -> Result<BatchPlan>
where
    D: AgentDiscovery,
    R: AgentRegistry,
    S: DiagnosticSink,
{
    let mut plan = BatchPlan::default();

    loop {
        let configured = configurator.configure(request, &*cursor)?;
        match configured.roster {
            RosterStatus::NotApplicable => {
                plan.configs.push(configured.config);
                break;
            }
            RosterStatus::Insufficient { .. } => break,
            RosterStatus::Paired { indices } => {
                tracing::debug!(
                    "Planned pairing {:?}: {:?}",
                    indices,
                    configured.config.state.agent_names
                );
                let roster_len = configured.config.roster.len();
                if plan.configs.is_empty() {
                    plan.configs.reserve(RoundRobinCursor::pairings(roster_len));
                }
                plan.configs.push(configured.config);
                if !cursor.advance_pair(roster_len) {
                    break;
                }
            }
        }
    }

    tracing::info!(
        "Planned {} {} configuration(s), {} match(es) total",
        plan.len(),
        request.mode.label(),
        plan.total_matches()
    );

    Ok(plan)
}
