//! Search and evaluation policy.
//!
//! Every heuristic the bot variants disagreed on (positional terms, mate
//! bonus, repetition and stalemate biases, move ordering) is a field here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Terms summed by the static evaluation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTerms {
    /// Piece values only
    Material,
    /// Piece values plus piece-square bonuses
    MaterialAndPosition,
}

/// How a child value is corrected when the move leading to it stalemates
/// the opponent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateAdjust {
    /// Keep the raw child value
    Off,
    /// Shift the value by `draw_bias` against the side that stalemated
    Bias,
    /// Halve the value toward zero
    Damp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Plies searched from the root
    pub depth: u8,
    pub eval: EvalTerms,
    /// Terms used when a repeated position is reached
    pub repetition_eval: EvalTerms,
    /// Added toward the mating side at checkmate leaves; 0 disables it
    pub mate_bonus: i32,
    /// Magnitude of the repetition and stalemate biases
    pub draw_bias: i32,
    pub stalemate: StalemateAdjust,
    pub detect_repetition: bool,
    /// MVV-LVA ordering at the root
    pub order_moves: bool,
    /// MVV-LVA ordering at every interior node as well
    pub order_all_nodes: bool,
    /// Return a root move as soon as it is found to mate
    pub mate_short_circuit: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            eval: EvalTerms::MaterialAndPosition,
            repetition_eval: EvalTerms::Material,
            mate_bonus: 1000,
            draw_bias: 100,
            stalemate: StalemateAdjust::Bias,
            detect_repetition: true,
            order_moves: true,
            order_all_nodes: false,
            mate_short_circuit: true,
        }
    }
}

impl SearchConfig {
    /// Plain material minimax: no positional terms, biases or ordering.
    pub fn material_only() -> Self {
        Self {
            depth: 3,
            eval: EvalTerms::Material,
            repetition_eval: EvalTerms::Material,
            mate_bonus: 0,
            draw_bias: 0,
            stalemate: StalemateAdjust::Off,
            detect_repetition: false,
            order_moves: false,
            order_all_nodes: false,
            mate_short_circuit: false,
        }
    }

    /// Material plus piece-square evaluation, still without terminal biases.
    pub fn positional() -> Self {
        Self {
            eval: EvalTerms::MaterialAndPosition,
            depth: 4,
            ..Self::material_only()
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid {
                field: "depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.mate_bonus < 0 {
            return Err(ConfigError::Invalid {
                field: "mate_bonus",
                reason: format!("must not be negative, got {}", self.mate_bonus),
            });
        }
        if self.draw_bias < 0 {
            return Err(ConfigError::Invalid {
                field: "draw_bias",
                reason: format!("must not be negative, got {}", self.draw_bias),
            });
        }
        Ok(())
    }
}
