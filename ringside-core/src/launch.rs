//! Launch configuration - what the next match batch runs
//!
//! A `LaunchConfig` is built once before the simulation loop starts and is
//! then handed (by reference or by value) to the loop and the match driver.
//! Nothing in it is mutated after setup.

use serde::{Deserialize, Serialize};

use crate::device::DeviceType;
use crate::side::Side;

/// Per-side launch settings plus the batch size
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchState {
    /// Control source kind, indexed by `Side::index()`
    pub device_types: [DeviceType; 2],
    /// Selected character per side
    pub character_names: [String; 2],
    /// Selected agent per side (two-agent and round-robin modes)
    pub agent_names: [Option<String>; 2],
    /// Agent driving both sides (single-agent mode)
    pub solo_agent_name: Option<String>,
    /// Number of matches in this batch
    pub repeat_count: u32,
}

impl LaunchState {
    pub fn device_type(&self, side: Side) -> DeviceType {
        self.device_types[side.index()]
    }

    pub fn character_name(&self, side: Side) -> &str {
        &self.character_names[side.index()]
    }

    /// Agent assigned to `side`, if any
    pub fn agent_name(&self, side: Side) -> Option<&str> {
        self.agent_names[side.index()].as_deref()
    }
}

/// Gates consulted by the match driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationFlags {
    /// Run without real-time pacing or rendering (repeat count > 1)
    pub automation_enabled: bool,
    /// One agent drives both sides
    pub single_agent_mode_enabled: bool,
    /// Tournament across every available agent
    pub round_robin_mode_enabled: bool,
}

impl AutomationFlags {
    /// Automation is switched on whenever more than one match is requested
    pub fn for_repeat_count(repeat_count: u32) -> Self {
        Self {
            automation_enabled: repeat_count > 1,
            ..Default::default()
        }
    }

    /// Single-agent and round-robin modes are mutually exclusive
    pub fn is_valid(&self) -> bool {
        !(self.single_agent_mode_enabled && self.round_robin_mode_enabled)
    }
}

/// Complete configuration for one match (or one batch of repeats)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub state: LaunchState,
    pub flags: AutomationFlags,
    /// Agents available for round-robin pairing (empty in other modes)
    pub roster: Vec<String>,
}

impl LaunchConfig {
    /// Whether the simulation loop has agents to instantiate.
    ///
    /// False after a round-robin configure with fewer than two agents;
    /// callers must check this before starting a match.
    pub fn agents_assigned(&self) -> bool {
        if self.flags.single_agent_mode_enabled {
            self.state.solo_agent_name.is_some()
        } else {
            self.state.agent_names.iter().all(Option::is_some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_state_defaults() {
        let state = LaunchState::default();
        assert_eq!(state.device_type(Side::P1), DeviceType::Keyboard);
        assert_eq!(state.agent_name(Side::P2), None);
        assert_eq!(state.solo_agent_name, None);
        assert_eq!(state.repeat_count, 0);
    }

    #[test]
    fn test_automation_threshold() {
        assert!(!AutomationFlags::for_repeat_count(0).automation_enabled);
        assert!(!AutomationFlags::for_repeat_count(1).automation_enabled);
        assert!(AutomationFlags::for_repeat_count(2).automation_enabled);
        assert!(AutomationFlags::for_repeat_count(100).automation_enabled);
    }

    #[test]
    fn test_flags_mutual_exclusion() {
        let mut flags = AutomationFlags::for_repeat_count(3);
        assert!(flags.is_valid());
        flags.single_agent_mode_enabled = true;
        assert!(flags.is_valid());
        flags.round_robin_mode_enabled = true;
        assert!(!flags.is_valid());
    }

    #[test]
    fn test_agents_assigned() {
        let mut config = LaunchConfig::default();
        assert!(!config.agents_assigned());

        config.state.agent_names = [Some("KickAI".to_string()), Some("ShotoAI".to_string())];
        assert!(config.agents_assigned());

        config.flags.single_agent_mode_enabled = true;
        assert!(!config.agents_assigned());
        config.state.solo_agent_name = Some("Mirror".to_string());
        assert!(config.agents_assigned());
    }

    #[test]
    fn test_json_uses_null_for_unset_agents() {
        let mut config = LaunchConfig::default();
        config.state.character_names = ["ZEN".to_string(), "GARNET".to_string()];
        config.state.device_types = [DeviceType::Ai; 2];

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["state"]["agent_names"][0], serde_json::Value::Null);
        assert_eq!(json["state"]["character_names"][1], "GARNET");
        assert_eq!(json["state"]["device_types"][0], "Ai");
    }
}
