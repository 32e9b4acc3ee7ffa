//! Agent roster - every agent available for round-robin pairing
//!
//! Level 3 - Steps and Level 4 - Configuration
//!
//! The roster is the packaged agents found on disk, in discovery order,
//! followed by the agents registered at runtime, in registration order.
//! Names present in both sources appear twice.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ringside_core::{LaunchError, Result};

/// Where packaged agents live on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSettings {
    /// Directory scanned for agent packages
    pub agent_dir: PathBuf,
    /// Package file extension (with or without the leading dot)
    pub package_extension: String,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            agent_dir: PathBuf::from("./data/ai"),
            package_extension: "jar".to_string(),
        }
    }
}

impl RosterSettings {
    /// Set the agent directory
    pub fn with_agent_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.agent_dir = dir.into();
        self
    }

    /// Set the package extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.package_extension = extension.into();
        self
    }
}

/// Lists agent packages stored on disk
pub trait AgentDiscovery {
    /// Names of the agent packages in `dir` carrying `extension`.
    ///
    /// An empty result is not an error.
    fn list_packaged_agents(&self, dir: &Path, extension: &str) -> Result<Vec<String>>;
}

/// Lists agents registered at runtime (not backed by a package file)
pub trait AgentRegistry {
    fn registered_agents(&self) -> Vec<String>;
}

/// File-system discovery: one agent per package file, named by its stem
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryDiscovery;

impl AgentDiscovery for DirectoryDiscovery {
    fn list_packaged_agents(&self, dir: &Path, extension: &str) -> Result<Vec<String>> {
        let wanted = extension.trim_start_matches('.');
        let discovery_error = |source| LaunchError::Discovery {
            dir: dir.to_path_buf(),
            source,
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Agent directory {} does not exist", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(discovery_error(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(discovery_error)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(wanted) {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => tracing::warn!(
                    "Skipping agent package with non UTF-8 name: {}",
                    path.display()
                ),
            }
        }

        // read_dir order is platform dependent
        names.sort();
        tracing::debug!("Discovered {} agent packages in {}", names.len(), dir.display());
        Ok(names)
    }
}

/// Registry of agents loaded in-process, kept in registration order
#[derive(Clone, Debug, Default)]
pub struct InMemoryRegistry {
    agents: Vec<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent by name
    pub fn register(&mut self, name: impl Into<String>) {
        self.agents.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InMemoryRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            agents: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AgentRegistry for InMemoryRegistry {
    fn registered_agents(&self) -> Vec<String> {
        self.agents.clone()
    }
}

/// Ordered list of agents taking part in a round-robin batch
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoster {
    agents: Vec<String>,
}

impl AgentRoster {
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }

    /// Discovered agents followed by registered agents, duplicates kept
    pub fn collect(
        discovery: &impl AgentDiscovery,
        registry: &impl AgentRegistry,
        settings: &RosterSettings,
    ) -> Result<Self> {
        let mut agents =
            discovery.list_packaged_agents(&settings.agent_dir, &settings.package_extension)?;
        agents.extend(registry.registered_agents());
        Ok(Self { agents })
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.agents.get(index).map(String::as_str)
    }

    /// A round-robin needs at least two entrants
    pub fn can_pair(&self) -> bool {
        self.agents.len() >= 2
    }

    /// Agents at the two cursor positions
    pub fn pair(&self, index_p1: usize, index_p2: usize) -> Result<[String; 2]> {
        let lookup = |index: usize| {
            self.get(index)
                .map(str::to_string)
                .ok_or(LaunchError::CursorOutOfRange {
                    index,
                    len: self.agents.len(),
                })
        };
        Ok([lookup(index_p1)?, lookup(index_p2)?])
    }

    pub fn into_vec(self) -> Vec<String> {
        self.agents
    }
}
