use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::task::{Category, Priority};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Category preselected in the add panel
    #[serde(default = "default_category")]
    pub default_category: Category,
    /// Priority preselected in the add panel
    #[serde(default = "default_priority")]
    pub default_priority: Priority,
    /// Seed a few example tasks on launch
    #[serde(default = "default_true")]
    pub sample_tasks: bool,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            default_category: default_category(),
            default_priority: default_priority(),
            sample_tasks: true,
        }
    }
}

fn default_category() -> Category {
    Category::Personal
}

fn default_priority() -> Priority {
    Priority::Medium
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-category colors keyed by lowercase category name
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            category_colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directive string for the log filter (`RUST_LOG` wins)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; defaults to `<temp dir>/jot.log`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
