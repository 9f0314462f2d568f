use crate::consts;
use crate::game::{Grid, GridError, Rules, TailRule};
use crate::theme::Theme;
use crate::ui::SpriteSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    pub(crate) game: GameConfig,

    /// Presentation settings
    pub(crate) display: DisplayConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("colorsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    pub(crate) rules: Rules,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig::try_from(RawGameConfig::default())
            .expect("default game settings should be valid")
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawGameConfig {
    tick_rate: u32,
    screen_width: u16,
    screen_height: u16,
    block: u16,
    tail_rule: TailRule,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            tick_rate: consts::DEFAULT_TICK_RATE,
            screen_width: consts::DEFAULT_SCREEN_WIDTH,
            screen_height: consts::DEFAULT_SCREEN_HEIGHT,
            block: consts::DEFAULT_BLOCK,
            tail_rule: TailRule::default(),
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GameConfigError> {
        if value.tick_rate == 0 {
            return Err(GameConfigError::ZeroTickRate);
        }
        let grid = Grid::from_screen(value.screen_width, value.screen_height, value.block)?;
        if grid.columns() > consts::MAX_GRID_COLUMNS || grid.rows() > consts::MAX_GRID_ROWS {
            return Err(GameConfigError::TooLargeForDisplay {
                columns: grid.columns(),
                rows: grid.rows(),
            });
        }
        Ok(GameConfig {
            tick_period: Duration::from_secs(1) / value.tick_rate,
            rules: Rules {
                grid,
                tail_rule: value.tail_rule,
            },
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Theme to start out with
    pub(crate) theme: Theme,

    pub(crate) sprites: SpriteSet,

    /// Whether to ring the terminal bell when the snake eats
    pub(crate) bell: bool,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameConfigError {
    #[error("tick-rate must be greater than zero")]
    ZeroTickRate,
    #[error("{columns}x{rows} grid is too large to fit on the screen")]
    TooLargeForDisplay { columns: u16, rows: u16 },
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
