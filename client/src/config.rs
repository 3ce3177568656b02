use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tictactoe_engine::{Difficulty, GameMode, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn to_mark(self) -> Mark {
        match self {
            Symbol::X => Mark::X,
            Symbol::O => Mark::O,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: GameMode,
    pub symbol: Symbol,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            symbol: Symbol::X,
            difficulty: Difficulty::Easy,
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load(path: &Path) -> Result<Config, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(err) => Err(format!("Failed to read config file: {}", err)),
    }
}

pub fn save(path: &Path, config: &Config) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
