//! Validator configuration.

use plasma_primitives::constants::MAX_TREE_DEPTH;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default upper bound on the depth of a membership proof.
pub const DEFAULT_MAX_PROOF_DEPTH: usize = MAX_TREE_DEPTH;

/// How a single-input exit treats the second slot of each signature set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UnusedSlotPolicy {
    /// The unused slots must hold the all-zero sentinel, otherwise the exit is rejected.
    #[default]
    RequireSentinel,

    /// The unused slots are not inspected.
    Ignore,
}

impl UnusedSlotPolicy {
    /// Returns true if unused slots must decode to the null address.
    pub fn requires_sentinel(self) -> bool {
        matches!(self, UnusedSlotPolicy::RequireSentinel)
    }
}

/// Tunables for [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidatorConfig {
    /// Deepest membership proof accepted, in 32-byte nodes. Capped at [`MAX_TREE_DEPTH`].
    pub max_proof_depth: usize,

    /// Treatment of the second signature slot when an exit has a single input.
    pub unused_slot: UnusedSlotPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_proof_depth: DEFAULT_MAX_PROOF_DEPTH,
            unused_slot: UnusedSlotPolicy::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Set the maximum proof depth.
    pub fn with_max_proof_depth(mut self, depth: usize) -> Self {
        self.max_proof_depth = depth;
        self
    }

    /// Set the unused slot policy.
    pub fn with_unused_slot(mut self, policy: UnusedSlotPolicy) -> Self {
        self.unused_slot = policy;
        self
    }

    /// Maximum proof depth after applying the hard cap.
    pub fn effective_max_proof_depth(&self) -> usize {
        self.max_proof_depth.min(MAX_TREE_DEPTH)
    }
}
