//! Launch configurator - builds a `LaunchConfig` from a `MatchRequest`
//!
//! Level 2 - Phases

use ringside_core::{AutomationFlags, DeviceType, LaunchConfig, LaunchState, Result};

use crate::cursor::MatchBatchDriver;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::request::{LaunchMode, MatchRequest};
use crate::roster::{
    AgentDiscovery, AgentRegistry, AgentRoster, DirectoryDiscovery, InMemoryRegistry,
    RosterSettings,
};

/// Diagnostic emitted when a round-robin cannot pair anyone
pub const INSUFFICIENT_ROSTER_MESSAGE: &str =
    "Cannot launch round-robin mode: fewer than two agents available";

/// Outcome of roster assignment for a configure call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterStatus {
    /// Not a round-robin request
    NotApplicable,
    /// Agents assigned from the roster at these (P1, P2) indices
    Paired { indices: (usize, usize) },
    /// Fewer than two agents; agent names left unset
    Insufficient { available: usize },
}

/// A finished configuration plus how the roster step went
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configured {
    pub config: LaunchConfig,
    pub roster: RosterStatus,
}

impl Configured {
    /// True unless a round-robin roster was too small to pair
    pub fn is_ready(&self) -> bool {
        !matches!(self.roster, RosterStatus::Insufficient { .. })
    }
}

/// Builds launch configurations against an agent roster source
#[derive(Clone, Debug)]
pub struct LaunchConfigurator<D = DirectoryDiscovery, R = InMemoryRegistry, S = TracingSink> {
    discovery: D,
    registry: R,
    sink: S,
    settings: RosterSettings,
}

impl Default for LaunchConfigurator {
    fn default() -> Self {
        Self::new(
            DirectoryDiscovery,
            InMemoryRegistry::new(),
            TracingSink,
            RosterSettings::default(),
        )
    }
}

impl<D, R, S> LaunchConfigurator<D, R, S>
where
    D: AgentDiscovery,
    R: AgentRegistry,
    S: DiagnosticSink,
{
    pub fn new(discovery: D, registry: R, sink: S, settings: RosterSettings) -> Self {
        Self {
            discovery,
            registry,
            sink,
            settings,
        }
    }

    pub fn settings(&self) -> &RosterSettings {
        &self.settings
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Configure one match (or batch of repeats).
    ///
    /// Every call produces a fresh configuration; nothing carries over from
    /// a previous call. In round-robin mode the roster is collected anew and
    /// the cursor is read but never advanced.
    pub fn configure(
        &self,
        request: &MatchRequest,
        cursor: &impl MatchBatchDriver,
    ) -> Result<Configured> {
        request.validate()?;

        tracing::debug!(
            "Configuring {} launch: {} vs {} (repeat={})",
            request.mode.label(),
            request.characters[0],
            request.characters[1],
            request.repeat_count
        );

        let configured = match &request.mode {
            LaunchMode::TwoAgent { agents } => {
                let mut config = base_config(request, DeviceType::Ai);
                config.state.agent_names = [Some(agents[0].clone()), Some(agents[1].clone())];
                Configured {
                    config,
                    roster: RosterStatus::NotApplicable,
                }
            }
            LaunchMode::SingleAgentBothSides { agent } => {
                let mut config = base_config(request, DeviceType::SingleAgentAi);
                config.state.solo_agent_name = Some(agent.clone());
                config.flags.single_agent_mode_enabled = true;
                Configured {
                    config,
                    roster: RosterStatus::NotApplicable,
                }
            }
            LaunchMode::RoundRobinAllPairs => self.configure_round_robin(request, cursor)?,
        };

        Ok(configured)
    }

    /// Round-robin step: collect roster, then seat the cursor's pairing
    fn configure_round_robin(
        &self,
        request: &MatchRequest,
        cursor: &impl MatchBatchDriver,
    ) -> Result<Configured> {
        let mut config = base_config(request, DeviceType::Ai);
        config.flags.round_robin_mode_enabled = true;

        let roster = AgentRoster::collect(&self.discovery, &self.registry, &self.settings)?;
        tracing::debug!("Round-robin roster: {:?}", roster.agents());

        let status = if roster.can_pair() {
            let (p1, p2) = cursor.current_pair_indices();
            let [agent_p1, agent_p2] = roster.pair(p1, p2)?;
            config.state.agent_names = [Some(agent_p1), Some(agent_p2)];
            RosterStatus::Paired { indices: (p1, p2) }
        } else {
            self.sink.info(INSUFFICIENT_ROSTER_MESSAGE);
            RosterStatus::Insufficient {
                available: roster.len(),
            }
        };

        config.roster = roster.into_vec();
        Ok(Configured {
            config,
            roster: status,
        })
    }
}

/// Fields shared by every mode
fn base_config(request: &MatchRequest, device: DeviceType) -> LaunchConfig {
    LaunchConfig {
        state: LaunchState {
            device_types: [device; 2],
            character_names: request.characters.clone(),
            repeat_count: request.repeat_count,
            ..Default::default()
        },
        flags: AutomationFlags::for_repeat_count(request.repeat_count),
        roster: Vec::new(),
    }
}
