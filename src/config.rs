//! Configuration system for the wordwrap CLI.
//!
//! Configuration is loaded from multiple sources with the following precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WORDWRAP_*)
//! 3. Project files (.wordwrap.yaml, deeper directories override shallower)
//! 4. User global (~/.config/wordwrap/config.yaml)
//! 5. Built-in defaults (lowest priority)
//!
//! This module provides:
//! - `Config` struct with all settings
//! - `EnvVar` registry for documentation
//! - Helper functions for env var parsing
//! - Config loading and merging

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs
// ============================================================================

/// Resolved configuration for the wordwrap CLI.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default reflow settings
    pub defaults: DefaultsConfig,
    /// Settings for `wordwrap check`
    pub check: CheckConfig,
}

/// Default reflow settings, used when no flag is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Column limit (0 = no wrapping)
    pub width: usize,
    /// Prefix for each line
    pub indent: String,
    /// Indent only the first line
    pub hanging: bool,
    /// Use the terminal width instead of `width`
    pub fit_terminal: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            width: 80,
            indent: String::new(),
            hanging: false,
            fit_terminal: false,
        }
    }
}

/// Settings for the check command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Exit with an error when lines exceed the width
    pub fail_on_overlong: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_on_overlong: true,
        }
    }
}

// ============================================================================
// Config File Layer
// ============================================================================

/// One config file as written. Unset keys stay `None`, so a file can set a
/// value equal to the built-in default over an earlier file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConfigFile {
    /// Default reflow settings
    pub defaults: DefaultsFile,
    /// Settings for `wordwrap check`
    pub check: CheckFile,
}

/// Reflow settings in a config file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DefaultsFile {
    /// Column limit (0 = no wrapping)
    pub width: Option<usize>,
    /// Prefix for each line
    pub indent: Option<String>,
    /// Indent only the first line
    pub hanging: Option<bool>,
    /// Use the terminal width instead of `width`
    pub fit_terminal: Option<bool>,
}

/// Check settings in a config file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckFile {
    /// Exit with an error when lines exceed the width
    pub fail_on_overlong: Option<bool>,
}

// ============================================================================
// Config Source Tracking
// ============================================================================

/// Source of a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in default
    Default,
    /// User global config (~/.config/wordwrap/config.yaml)
    UserGlobal,
    /// Project file (.wordwrap.yaml)
    ProjectFile(String),
    /// Environment variable
    EnvVar(String),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::UserGlobal => write!(f, "~/.config/wordwrap/config.yaml"),
            ConfigSource::ProjectFile(path) => write!(f, "{}", path),
            ConfigSource::EnvVar(name) => write!(f, "${}", name),
        }
    }
}

// ============================================================================
// Environment Variable Registry
// ============================================================================

/// Environment variable definition for documentation.
pub struct EnvVar {
    /// Variable name (e.g., "WORDWRAP_WIDTH")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value or behavior
    pub default: &'static str,
    /// Config path this maps to (e.g., "defaults.width")
    pub config_path: &'static str,
    /// Valid values (if enumerable)
    pub values: Option<&'static str>,
}

/// Registry of all supported environment variables.
pub const ENV_VARS: &[EnvVar] = &[
    EnvVar {
        name: "NO_COLOR",
        description: "Disable colored output (standard)",
        default: "unset",
        config_path: "-",
        values: Some("any non-empty value"),
    },
    EnvVar {
        name: "WORDWRAP_WIDTH",
        description: "Default column limit",
        default: "80",
        config_path: "defaults.width",
        values: Some("number, 0 disables wrapping"),
    },
    EnvVar {
        name: "WORDWRAP_INDENT",
        description: "Default line prefix",
        default: "empty",
        config_path: "defaults.indent",
        values: None,
    },
    EnvVar {
        name: "WORDWRAP_HANGING",
        description: "Indent only the first line by default",
        default: "false",
        config_path: "defaults.hanging",
        values: Some("1, true, yes"),
    },
    EnvVar {
        name: "WORDWRAP_FIT",
        description: "Wrap to the terminal width by default",
        default: "false",
        config_path: "defaults.fit_terminal",
        values: Some("1, true, yes"),
    },
    EnvVar {
        name: "WORDWRAP_LOG",
        description: "Log level for diagnostics on stderr",
        default: "warn",
        config_path: "-",
        values: Some("error, warn, info, debug, trace"),
    },
];

// ============================================================================
// Environment Variable Helpers
// ============================================================================

/// Parse a boolean environment variable.
///
/// Returns `Some(true)` if the variable is set to a truthy value (1, true, yes),
/// `Some(false)` if set to a falsy value (0, false, no),
/// and `None` if unset or empty.
pub fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| {
        if v.is_empty() {
            return None;
        }
        match v.to_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        }
    })
}

/// Parse a string environment variable.
///
/// Returns `Some(value)` if set and non-empty, `None` otherwise.
pub fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a usize environment variable.
///
/// Returns `Some(value)` if set and parseable, `None` otherwise.
pub fn env_usize(name: &str) -> Option<usize> {
    env_string(name).and_then(|v| v.parse().ok())
}

// ============================================================================
// Config Loading
// ============================================================================

/// Project config file name, looked up in the current directory and its parents.
pub const PROJECT_FILE: &str = ".wordwrap.yaml";

/// Load configuration from all sources.
///
/// Resolution order (later overrides earlier):
/// 1. Built-in defaults
/// 2. User global (~/.config/wordwrap/config.yaml)
/// 3. Project files (walk from filesystem root to cwd)
/// 4. Environment variables
///
/// Does not apply CLI flags (those are handled by args resolution).
pub fn load_config(cwd: &Path) -> LoadedConfig {
    let mut config = Config::default();
    let mut sources = vec![ConfigSource::Default];

    if let Some(user_config_path) = user_config_path()
        && let Some(user_config) = load_file(&user_config_path)
    {
        merge(&mut config, &user_config);
        sources.push(ConfigSource::UserGlobal);
    }

    for path in collect_project_paths(cwd) {
        if let Some(project_config) = load_file(&path) {
            merge(&mut config, &project_config);
            sources.push(ConfigSource::ProjectFile(path.display().to_string()));
        }
    }

    apply_env(&mut config, &mut sources);

    tracing::debug!(?sources, "configuration loaded");
    LoadedConfig { config, sources }
}

/// Result of loading configuration with source tracking.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The merged configuration
    pub config: Config,
    /// Sources that contributed to this config (in order of application)
    pub sources: Vec<ConfigSource>,
}

/// Get the user config file path (~/.config/wordwrap/config.yaml).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wordwrap").join("config.yaml"))
}

/// Load a config file, returning None if it doesn't exist or can't be parsed.
pub fn load_file(path: &Path) -> Option<ConfigFile> {
    let content = fs::read_to_string(path).ok()?;
    match serde_yaml::from_str(&content) {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            None
        }
    }
}

/// Collect project config paths from the filesystem root down to cwd.
///
/// Returns paths in order from root to cwd (so later ones override earlier).
fn collect_project_paths(cwd: &Path) -> Vec<PathBuf> {
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());

    let mut paths: Vec<PathBuf> = cwd
        .ancestors()
        .map(|dir| dir.join(PROJECT_FILE))
        .filter(|path| path.is_file())
        .collect();
    paths.reverse();
    paths
}

/// Apply WORDWRAP_* environment overrides.
fn apply_env(config: &mut Config, sources: &mut Vec<ConfigSource>) {
    if let Some(width) = env_usize("WORDWRAP_WIDTH") {
        config.defaults.width = width;
        sources.push(ConfigSource::EnvVar("WORDWRAP_WIDTH".to_string()));
    }
    if let Some(indent) = env_string("WORDWRAP_INDENT") {
        config.defaults.indent = indent;
        sources.push(ConfigSource::EnvVar("WORDWRAP_INDENT".to_string()));
    }
    if let Some(hanging) = env_bool("WORDWRAP_HANGING") {
        config.defaults.hanging = hanging;
        sources.push(ConfigSource::EnvVar("WORDWRAP_HANGING".to_string()));
    }
    if let Some(fit) = env_bool("WORDWRAP_FIT") {
        config.defaults.fit_terminal = fit;
        sources.push(ConfigSource::EnvVar("WORDWRAP_FIT".to_string()));
    }
}

/// Merge a config file into the resolved config.
///
/// Every key set in the file overrides the value in base.
pub fn merge(base: &mut Config, overlay: &ConfigFile) {
    if let Some(width) = overlay.defaults.width {
        base.defaults.width = width;
    }
    if let Some(ref indent) = overlay.defaults.indent {
        base.defaults.indent = indent.clone();
    }
    if let Some(hanging) = overlay.defaults.hanging {
        base.defaults.hanging = hanging;
    }
    if let Some(fit) = overlay.defaults.fit_terminal {
        base.defaults.fit_terminal = fit;
    }

    if let Some(fail) = overlay.check.fail_on_overlong {
        base.check.fail_on_overlong = fail;
    }
}

/// Generate JSON schema for config files.
pub fn json_schema() -> String {
    let schema = schemars::schema_for!(ConfigFile);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

/// Generate a template config file with comments.
pub fn template_config() -> String {
    r#"# wordwrap configuration
# Place in .wordwrap.yaml (project) or ~/.config/wordwrap/config.yaml (user)

# Default reflow settings
# defaults:
#   width: 80           # column limit, 0 disables wrapping
#   indent: ""          # prefix for each line
#   hanging: false      # indent only the first line, pad the rest
#   fit_terminal: false # use the terminal width instead of width

# wordwrap check
# check:
#   fail_on_overlong: true
"#
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to serialize env var tests
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap();

        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(*k).ok()))
            .collect();

        // SAFETY: env access in tests is serialized by ENV_MUTEX
        unsafe {
            for (k, v) in vars {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        let result = f();

        // SAFETY: as above
        unsafe {
            for (k, original) in originals {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        result
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordwrap-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_env_bool() {
        with_env(&[("TEST_WW_BOOL", Some("YES"))], || {
            assert_eq!(env_bool("TEST_WW_BOOL"), Some(true));
        });
        with_env(&[("TEST_WW_BOOL", Some("0"))], || {
            assert_eq!(env_bool("TEST_WW_BOOL"), Some(false));
        });
        with_env(&[("TEST_WW_BOOL", Some("maybe"))], || {
            assert_eq!(env_bool("TEST_WW_BOOL"), None);
        });
        with_env(&[("TEST_WW_BOOL", None)], || {
            assert_eq!(env_bool("TEST_WW_BOOL"), None);
        });
    }

    #[test]
    fn test_env_usize() {
        with_env(&[("TEST_WW_NUM", Some("72"))], || {
            assert_eq!(env_usize("TEST_WW_NUM"), Some(72));
        });
        with_env(&[("TEST_WW_NUM", Some("-1"))], || {
            assert_eq!(env_usize("TEST_WW_NUM"), None);
        });
        with_env(&[("TEST_WW_NUM", Some(""))], || {
            assert_eq!(env_usize("TEST_WW_NUM"), None);
        });
    }

    #[test]
    fn test_apply_env_overrides() {
        with_env(
            &[
                ("WORDWRAP_WIDTH", Some("72")),
                ("WORDWRAP_INDENT", Some("> ")),
                ("WORDWRAP_HANGING", None),
                ("WORDWRAP_FIT", Some("no")),
            ],
            || {
                let mut config = Config::default();
                let mut sources = vec![ConfigSource::Default];
                apply_env(&mut config, &mut sources);

                assert_eq!(config.defaults.width, 72);
                assert_eq!(config.defaults.indent, "> ");
                assert!(!config.defaults.hanging);
                assert!(!config.defaults.fit_terminal);
                assert!(sources.contains(&ConfigSource::EnvVar("WORDWRAP_WIDTH".to_string())));
                assert!(sources.contains(&ConfigSource::EnvVar("WORDWRAP_FIT".to_string())));
                assert!(!sources.contains(&ConfigSource::EnvVar("WORDWRAP_HANGING".to_string())));
            },
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.defaults.width, 80);
        assert_eq!(config.defaults.indent, "");
        assert!(!config.defaults.hanging);
        assert!(config.check.fail_on_overlong);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("defaults:\n  indent: \"# \"\n").unwrap();
        assert_eq!(config.defaults.indent, "# ");
        assert_eq!(config.defaults.width, 80);
        assert!(config.check.fail_on_overlong);
    }

    fn file(yaml: &str) -> ConfigFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_merge_overlay_wins() {
        let mut base = Config::default();
        base.defaults.indent = "> ".to_string();

        merge(&mut base, &file("defaults:\n  width: 100\n"));

        assert_eq!(base.defaults.width, 100);
        // Untouched by overlay
        assert_eq!(base.defaults.indent, "> ");
    }

    #[test]
    fn test_merge_empty_file_preserves_base() {
        let mut base = Config::default();
        base.check.fail_on_overlong = false;
        merge(&mut base, &ConfigFile::default());
        assert!(!base.check.fail_on_overlong);
    }

    #[test]
    fn test_deeper_file_can_restore_default_values() {
        let mut config = Config::default();
        merge(
            &mut config,
            &file("defaults:\n  width: 100\n  hanging: true\ncheck:\n  fail_on_overlong: false\n"),
        );
        merge(
            &mut config,
            &file("defaults:\n  width: 80\n  hanging: false\ncheck:\n  fail_on_overlong: true\n"),
        );

        assert_eq!((config.defaults.width, config.defaults.hanging), (80, false));
        assert!(config.check.fail_on_overlong);
    }

    #[test]
    fn test_file_layer_leaves_unset_keys_empty() {
        let layer = file("defaults:\n  indent: \"\"\n");
        assert_eq!(layer.defaults.indent, Some(String::new()));
        assert_eq!(layer.defaults.width, None);
        assert_eq!(layer.check, CheckFile::default());
    }

    #[test]
    fn test_project_files_root_first() {
        let root = scratch_dir("project-files");
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(PROJECT_FILE), "defaults:\n  width: 100\n").unwrap();
        fs::write(nested.join(PROJECT_FILE), "defaults:\n  width: 60\n").unwrap();

        let root = root.canonicalize().unwrap();
        let ours: Vec<PathBuf> = collect_project_paths(&nested)
            .into_iter()
            .filter(|p| p.starts_with(&root))
            .collect();
        assert_eq!(
            ours,
            vec![
                root.join(PROJECT_FILE),
                root.join("a").join("b").join(PROJECT_FILE),
            ]
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_load_file_invalid_yaml() {
        let root = scratch_dir("invalid-yaml");
        let path = root.join(PROJECT_FILE);
        fs::write(&path, "defaults: [not, a, map]\n").unwrap();
        assert_eq!(load_file(&path), None);
        assert_eq!(load_file(&root.join("missing.yaml")), None);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_json_schema_generates() {
        let schema = json_schema();
        assert!(schema.contains("ConfigFile"));
        assert!(schema.contains("DefaultsFile"));
        assert!(schema.contains("fail_on_overlong"));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Default.to_string(), "default");
        assert_eq!(
            ConfigSource::EnvVar("WORDWRAP_WIDTH".to_string()).to_string(),
            "$WORDWRAP_WIDTH"
        );
    }

    #[test]
    fn test_template_config() {
        let template = template_config();
        assert!(template.contains("# wordwrap configuration"));
        assert!(template.contains("defaults:"));
        assert!(template.contains("check:"));
    }
}
