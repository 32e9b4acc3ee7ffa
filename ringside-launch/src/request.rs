//! Match requests - what the caller asks to launch
//!
//! Level 4 - Configuration

use serde::{Deserialize, Serialize};

use ringside_core::{LaunchError, Result, Side};

/// Launch mode with its mode-specific payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchMode {
    /// Each side controlled by its own agent
    TwoAgent { agents: [String; 2] },
    /// One agent instance drives both sides
    SingleAgentBothSides { agent: String },
    /// Pair every discovered and registered agent against each other
    RoundRobinAllPairs,
}

impl LaunchMode {
    /// Short human-readable mode name
    pub fn label(&self) -> &'static str {
        match self {
            LaunchMode::TwoAgent { .. } => "two-agent",
            LaunchMode::SingleAgentBothSides { .. } => "single-agent",
            LaunchMode::RoundRobinAllPairs => "round-robin",
        }
    }
}

/// A requested pairing of characters plus how they are controlled
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Character per side, indexed by `Side::index()`
    pub characters: [String; 2],
    /// Number of matches in the batch
    pub repeat_count: u32,
    pub mode: LaunchMode,
}

impl MatchRequest {
    /// Two agents, one per side
    pub fn two_agent(
        character_p1: impl Into<String>,
        character_p2: impl Into<String>,
        agent_p1: impl Into<String>,
        agent_p2: impl Into<String>,
        repeat_count: u32,
    ) -> Self {
        Self {
            characters: [character_p1.into(), character_p2.into()],
            repeat_count,
            mode: LaunchMode::TwoAgent {
                agents: [agent_p1.into(), agent_p2.into()],
            },
        }
    }

    /// One agent controlling both sides
    pub fn single_agent(
        character_p1: impl Into<String>,
        character_p2: impl Into<String>,
        agent: impl Into<String>,
        repeat_count: u32,
    ) -> Self {
        Self {
            characters: [character_p1.into(), character_p2.into()],
            repeat_count,
            mode: LaunchMode::SingleAgentBothSides {
                agent: agent.into(),
            },
        }
    }

    /// Round-robin over every available agent
    pub fn round_robin(
        character_p1: impl Into<String>,
        character_p2: impl Into<String>,
        repeat_count: u32,
    ) -> Self {
        Self {
            characters: [character_p1.into(), character_p2.into()],
            repeat_count,
            mode: LaunchMode::RoundRobinAllPairs,
        }
    }

    pub fn character_name(&self, side: Side) -> &str {
        &self.characters[side.index()]
    }

    /// Agent requested for `side`.
    ///
    /// The solo agent is reported for both sides in single-agent mode.
    /// Round-robin requests name no agent; pairings come from the roster.
    pub fn agent_name(&self, side: Side) -> Option<&str> {
        match &self.mode {
            LaunchMode::TwoAgent { agents } => Some(agents[side.index()].as_str()),
            LaunchMode::SingleAgentBothSides { agent } => Some(agent.as_str()),
            LaunchMode::RoundRobinAllPairs => None,
        }
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn is_round_robin(&self) -> bool {
        matches!(self.mode, LaunchMode::RoundRobinAllPairs)
    }

    /// Check preconditions before configuring.
    ///
    /// Only the batch size is checked. Character and agent identifiers are
    /// passed through verbatim and resolved later by the simulation.
    pub fn validate(&self) -> Result<()> {
        if self.repeat_count == 0 {
            return Err(LaunchError::InvalidConfiguration(
                "repeat count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_agent_accessors() {
        let request = MatchRequest::two_agent("ZEN", "GARNET", "KickAI", "ShotoAI", 3);
        assert_eq!(request.character_name(Side::P1), "ZEN");
        assert_eq!(request.character_name(Side::P2), "GARNET");
        assert_eq!(request.agent_name(Side::P1), Some("KickAI"));
        assert_eq!(request.agent_name(Side::P2), Some("ShotoAI"));
        assert_eq!(request.repeat_count(), 3);
        assert_eq!(request.mode.label(), "two-agent");
    }

    #[test]
    fn test_single_agent_reports_solo_for_both_sides() {
        let request = MatchRequest::single_agent("LUD", "ZEN", "Mirror", 1);
        assert_eq!(request.agent_name(Side::P1), Some("Mirror"));
        assert_eq!(request.agent_name(Side::P2), Some("Mirror"));
    }

    #[test]
    fn test_round_robin_names_no_agents() {
        let request = MatchRequest::round_robin("ZEN", "ZEN", 1);
        assert!(request.is_round_robin());
        assert_eq!(request.agent_name(Side::P1), None);
    }

    #[test]
    fn test_validate_rejects_zero_repeats() {
        let request = MatchRequest::round_robin("ZEN", "ZEN", 0);
        assert!(matches!(
            request.validate(),
            Err(LaunchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_passes_blank_agents_through() {
        let request = MatchRequest::two_agent("ZEN", "ZEN", "KickAI", "  ", 1);
        assert!(request.validate().is_ok());

        let request = MatchRequest::single_agent("ZEN", "ZEN", "", 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_passes_unknown_characters_through() {
        let request = MatchRequest::two_agent("NOT_A_CHARACTER", "", "KickAI", "ShotoAI", 1);
        assert!(request.validate().is_ok());
    }
}
