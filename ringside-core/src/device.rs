//! Control source kinds assigned to each side

use serde::{Deserialize, Serialize};

/// Who produces input for a side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Human keyboard input (an unconfigured side)
    #[default]
    Keyboard,
    /// One agent instance per side
    Ai,
    /// A single agent instance drives both sides
    SingleAgentAi,
}
