// src/config/mod.rs
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tui::style::Color;

use crate::scroll::DEFAULT_BUFFER_SIZE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub list: ListConfig,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub item_height: u32,
    pub buffer_size: usize,
    pub wheel_step: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub background: ColorDef,
    pub foreground: ColorDef,
    pub border: ColorDef,
    pub title: ColorDef,
    pub secondary: ColorDef,
    pub status_line: StatusLineTheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLineTheme {
    pub background: ColorDef,
    pub foreground: ColorDef,
    pub warning: ColorDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 2,
            buffer_size: DEFAULT_BUFFER_SIZE,
            wheel_step: 3,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "viva".to_string(),
            background: ColorDef::Named(NamedColor::Black),
            foreground: ColorDef::Named(NamedColor::White),
            border: ColorDef::Named(NamedColor::BrightBlack),
            title: ColorDef::Rgb { r: 99, g: 102, b: 241 },
            secondary: ColorDef::Named(NamedColor::BrightBlack),
            status_line: StatusLineTheme::default(),
        }
    }
}

impl Default for StatusLineTheme {
    fn default() -> Self {
        Self {
            background: ColorDef::Named(NamedColor::BrightBlack),
            foreground: ColorDef::Named(NamedColor::BrightWhite),
            warning: ColorDef::Named(NamedColor::BrightYellow),
        }
    }
}

impl ColorDef {
    pub fn to_tui_color(&self) -> Color {
        match self {
            ColorDef::Named(named) => named.to_tui_color(),
            ColorDef::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
        }
    }
}

impl NamedColor {
    pub fn to_tui_color(&self) -> Color {
        match self {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::Gray,
            NamedColor::BrightBlack => Color::DarkGray,
            NamedColor::BrightRed => Color::LightRed,
            NamedColor::BrightGreen => Color::LightGreen,
            NamedColor::BrightYellow => Color::LightYellow,
            NamedColor::BrightBlue => Color::LightBlue,
            NamedColor::BrightMagenta => Color::LightMagenta,
            NamedColor::BrightCyan => Color::LightCyan,
            NamedColor::BrightWhite => Color::White,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path()?;
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_file(&Self::get_config_path()?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|mut path| {
                path.push("vivascroll");
                path.push("config.toml");
                path
            })
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.list.item_height == 0 {
            return Err(ConfigError::Invalid("list.item_height must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_list_config() {
        let config = AppConfig::default();
        assert_eq!(config.list.item_height, 2);
        assert_eq!(config.list.buffer_size, 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [list]
            item_height = 3

            [theme]
            title = "bright_cyan"
            "#,
        )
        .unwrap();

        assert_eq!(config.list.item_height, 3);
        assert_eq!(config.list.buffer_size, 5);
        assert_eq!(config.theme.title, ColorDef::Named(NamedColor::BrightCyan));
        assert_eq!(config.theme.status_line, StatusLineTheme::default());
    }

    #[test]
    fn test_rgb_color() {
        let config: AppConfig = toml::from_str(
            r#"
            [theme]
            border = { r = 10, g = 20, b = 30 }
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.border.to_tui_color(), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.list.buffer_size = 9;
        config.save_to_file(&path).unwrap();

        assert_eq!(AppConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_item_height_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[list]\nitem_height = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
