mod errors;
mod storage;

pub(crate) use errors::ConfigError;
use focca_ui_menu::MenuEntry;
use serde::Serialize;
use serde_json::Value;
pub(crate) use storage::{ConfigLoadStatus, load_config};

use crate::widgets::sidebar::SIDEBAR_WIDTH;

const DEFAULT_BREAKPOINT: f32 = 768.0;
const DEFAULT_BASENAME: &str = "/focca-orm";

/// Site settings read from the user configuration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SiteConfig {
    /// Window width at which the layout switches to the wide regime.
    pub(crate) breakpoint: f32,
    pub(crate) sidebar_width: f32,
    /// Prefix accepted in front of every route path.
    pub(crate) basename: String,
    /// Replacement for the built-in documentation menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) menu: Option<Vec<MenuEntry>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            sidebar_width: SIDEBAR_WIDTH,
            basename: String::from(DEFAULT_BASENAME),
            menu: None,
        }
    }
}

impl SiteConfig {
    /// Read known fields from a JSON object.
    ///
    /// Every field is checked on its own: an invalid value is reported and
    /// replaced by its default while the other fields are still applied.
    pub(crate) fn from_json(value: &Value) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut issues = Vec::new();

        let Some(object) = value.as_object() else {
            issues.push(ConfigError::Invalid {
                field: "<root>",
                reason: String::from("expected a JSON object"),
            });
            return (config, issues);
        };

        if let Some(value) = object.get("breakpoint") {
            match dimension("breakpoint", value) {
                Ok(breakpoint) => config.breakpoint = breakpoint,
                Err(err) => issues.push(err),
            }
        }

        if let Some(value) = object.get("sidebar_width") {
            match dimension("sidebar_width", value) {
                Ok(width) => config.sidebar_width = width,
                Err(err) => issues.push(err),
            }
        }

        if let Some(value) = object.get("basename") {
            match value.as_str() {
                Some(basename) => config.basename = String::from(basename),
                None => issues.push(ConfigError::Invalid {
                    field: "basename",
                    reason: String::from("expected a string"),
                }),
            }
        }

        if let Some(value) = object.get("menu") {
            match menu(value) {
                Ok(entries) => config.menu = Some(entries),
                Err(err) => issues.push(err),
            }
        }

        (config, issues)
    }
}

fn dimension(field: &'static str, value: &Value) -> Result<f32, ConfigError> {
    let number = serde_json::from_value::<f32>(value.clone())?;
    if !number.is_finite() || number <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{number} is not a positive size"),
        });
    }
    Ok(number)
}

fn menu(value: &Value) -> Result<Vec<MenuEntry>, ConfigError> {
    let entries = serde_json::from_value::<Vec<MenuEntry>>(value.clone())?;
    if entries.is_empty() {
        return Err(ConfigError::Invalid {
            field: "menu",
            reason: String::from("menu override has no entries"),
        });
    }
    Ok(entries)
}
