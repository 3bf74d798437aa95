use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crosses_engine::game::{Difficulty, GameMode};

const CONFIG_FILE_NAME: &str = "crosses_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    /// Fixed RNG seed for the random bot; a fresh seed per run when unset.
    pub seed: Option<u64>,
    /// Redraw the board after every accepted command.
    pub show_board_every_tick: bool,
    /// Skip the interactive mode/difficulty prompts.
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_board_every_tick: true,
            mode: None,
            difficulty: None,
        }
    }
}

impl CliConfig {
    /// Missing file means defaults; a present but invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.mode == Some(GameMode::Unselected) {
            return Err("mode must be TwoPlayer or VsComputer".to_string());
        }
        if self.difficulty == Some(Difficulty::Unselected) {
            return Err("difficulty must be Random or Optimal".to_string());
        }
        if self.difficulty.is_some() && self.mode != Some(GameMode::VsComputer) {
            return Err("difficulty requires mode: VsComputer".to_string());
        }
        Ok(())
    }
}
