//! Hook configuration
//!
//! A project configures its hooks in exactly one file, picked from a fixed
//! list of candidate names. The first candidate that exists wins and the
//! rest are ignored. Whatever the file format, the document has a single
//! `hooks` table mapping a git hook name to either one command string or a
//! list of command strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde::de::IgnoredAny;
use std::fs;
use std::path::{Path, PathBuf};
use tego_core::{Error, Result};

/// Candidate configuration files, in lookup order
pub const CONFIG_FILES: &[&str] = &[
    ".tegorc.json",
    ".tegorc",
    "tego.json",
    "tego.toml",
    "tego.yaml",
    "tego.yml",
];

/// Name of the file written by `tego init`
pub const SAMPLE_CONFIG_FILE: &str = ".tegorc.json";

/// Content written by `tego init`
pub const SAMPLE_CONFIG: &str = r#"{
  "hooks": {
    "pre-commit": "npm run lint && npm test",
    "commit-msg": "npx commitlint --edit $1",
    "pre-push": "npm run test"
  }
}
"#;

/// On-disk format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file name
    ///
    /// `.tegorc` has no extension but holds JSON. Unknown names fall back
    /// to JSON as well.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if name.ends_with(".toml") {
            Self::Toml
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }

    /// Lowercase name used in log output
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }
}

/// A configuration file together with its detected format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    path: PathBuf,
    format: ConfigFormat,
}

impl ConfigSource {
    /// Use an explicit file, detecting its format from the name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ConfigFormat::detect(&path);
        Self { path, format }
    }

    /// Find the first candidate file that exists in `dir`
    #[must_use]
    pub fn discover(dir: &Path) -> Option<Self> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(Self::from_path)
    }

    /// Path of the configuration file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected format
    #[must_use]
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Read and decode the file
    pub fn load(&self) -> Result<HookConfig> {
        tracing::debug!(
            path = %self.path.display(),
            format = self.format.name(),
            "Loading hook configuration"
        );

        let content = fs::read_to_string(&self.path).map_err(|source| Error::ConfigRead {
            path: self.path.clone(),
            source,
        })?;

        HookConfig::parse(&content, self.format).map_err(|message| Error::ConfigParse {
            path: self.path.clone(),
            message,
        })
    }
}

/// Commands configured for a single hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// One command string
    Single(String),
    /// Commands run in order, stopping at the first failure
    Sequence(Vec<String>),
}

impl CommandSpec {
    /// Normalize to an ordered list of commands
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        match self {
            Self::Single(cmd) => vec![cmd.clone()],
            Self::Sequence(cmds) => cmds.clone(),
        }
    }
}

/// Hook name to command mapping, immutable once loaded
///
/// A hook whose value is neither a string nor a list keeps its name (so it
/// is still installed and uninstalled) but has no commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHookConfig")]
pub struct HookConfig {
    hooks: IndexMap<String, Option<CommandSpec>>,
}

impl HookConfig {
    /// Load the first candidate configuration file found in `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        ConfigSource::discover(dir)
            .ok_or(Error::ConfigNotFound)?
            .load()
    }

    /// Load a specific configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        ConfigSource::from_path(path).load()
    }

    /// Decode a document in the given format
    ///
    /// Returns the decoder's message on failure so the caller can attach
    /// the file name.
    pub fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Commands for `hook_name`, or `None` when the hook is not configured
    #[must_use]
    pub fn commands(&self, hook_name: &str) -> Option<Vec<String>> {
        self.get(hook_name).map(CommandSpec::commands)
    }

    /// Command spec for `hook_name`, if it has a usable one
    #[must_use]
    pub fn get(&self, hook_name: &str) -> Option<&CommandSpec> {
        self.hooks.get(hook_name).and_then(Option::as_ref)
    }

    /// Whether `hook_name` appears in the configuration at all
    #[must_use]
    pub fn contains(&self, hook_name: &str) -> bool {
        self.hooks.contains_key(hook_name)
    }

    /// All configured hook names, in document order
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Iterate over hook names and their command specs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&CommandSpec>)> {
        self.hooks
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.as_ref()))
    }

    /// Number of configured hooks
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FromIterator<(String, CommandSpec)> for HookConfig {
    fn from_iter<I: IntoIterator<Item = (String, CommandSpec)>>(iter: I) -> Self {
        Self {
            hooks: iter
                .into_iter()
                .map(|(name, spec)| (name, Some(spec)))
                .collect(),
        }
    }
}

/// Write the sample configuration into `dir`
///
/// Refuses to write when any candidate file already exists, since that
/// file would shadow or be shadowed by the new one.
pub fn write_sample(dir: &Path) -> Result<PathBuf> {
    if let Some(existing) = ConfigSource::discover(dir) {
        return Err(Error::ConfigExists {
            path: existing.path().to_path_buf(),
        });
    }

    let path = dir.join(SAMPLE_CONFIG_FILE);
    fs::write(&path, SAMPLE_CONFIG)?;
    Ok(path)
}

#[derive(Deserialize)]
struct RawHookConfig {
    #[serde(default)]
    hooks: Option<IndexMap<String, RawCommandSpec>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommandSpec {
    Single(String),
    Sequence(Vec<RawCommand>),
    Unsupported(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommand {
    Command(String),
    Other(IgnoredAny),
}

impl From<RawHookConfig> for HookConfig {
    fn from(raw: RawHookConfig) -> Self {
        let hooks = raw
            .hooks
            .unwrap_or_default()
            .into_iter()
            .map(|(name, spec)| {
                let spec = match spec {
                    RawCommandSpec::Single(cmd) => Some(CommandSpec::Single(cmd)),
                    RawCommandSpec::Sequence(items) => {
                        let total = items.len();
                        let cmds: Vec<String> = items
                            .into_iter()
                            .filter_map(|item| match item {
                                RawCommand::Command(cmd) => Some(cmd),
                                RawCommand::Other(_) => None,
                            })
                            .collect();
                        if cmds.len() < total {
                            tracing::warn!(
                                hook = %name,
                                dropped = total - cmds.len(),
                                "Ignoring non-string entries in hook command list"
                            );
                        }
                        Some(CommandSpec::Sequence(cmds))
                    }
                    RawCommandSpec::Unsupported(_) => {
                        tracing::warn!(
                            hook = %name,
                            "Hook value must be a string or a list of strings, ignoring its commands"
                        );
                        None
                    }
                };
                (name, spec)
            })
            .collect();

        Self { hooks }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format() {
        assert_eq!(ConfigFormat::detect(Path::new(".tegorc.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect(Path::new(".tegorc")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect(Path::new("tego.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect(Path::new("tego.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::detect(Path::new("tego.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::detect(Path::new("tego.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::detect(Path::new("hooks.conf")), ConfigFormat::Json);
    }

    #[test]
    fn test_parse_json_single_and_sequence() {
        let config = HookConfig::parse(
            r#"{"hooks": {"pre-commit": "cargo fmt --check", "pre-push": ["cargo test", "cargo clippy"]}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(
            config.get("pre-commit"),
            Some(&CommandSpec::Single("cargo fmt --check".to_string()))
        );
        assert_eq!(
            config.commands("pre-push").unwrap(),
            vec!["cargo test", "cargo clippy"]
        );
    }

    #[test]
    fn test_parse_toml() {
        let config = HookConfig::parse(
            r#"
[hooks]
pre-commit = "make lint"
commit-msg = ["echo checking", "grep -q . $1"]
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.commands("pre-commit").unwrap(), vec!["make lint"]);
        assert_eq!(
            config.commands("commit-msg").unwrap(),
            vec!["echo checking", "grep -q . $1"]
        );
    }

    #[test]
    fn test_parse_yaml() {
        let config = HookConfig::parse(
            "hooks:\n  pre-commit:\n    - npm run lint\n    - npm test\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        assert_eq!(
            config.commands("pre-commit").unwrap(),
            vec!["npm run lint", "npm test"]
        );
    }

    #[test]
    fn test_non_string_sequence_entries_are_dropped() {
        let config = HookConfig::parse(
            r#"{"hooks": {"pre-commit": ["echo one", 42, {"x": 1}, null, "echo two"]}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(
            config.commands("pre-commit").unwrap(),
            vec!["echo one", "echo two"]
        );
    }

    #[test]
    fn test_unsupported_value_keeps_name_without_commands() {
        let config = HookConfig::parse(
            r#"{"hooks": {"pre-commit": 5, "pre-push": null}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert!(config.contains("pre-commit"));
        assert!(config.contains("pre-push"));
        assert!(config.commands("pre-commit").is_none());
        assert!(config.commands("pre-push").is_none());
        assert_eq!(config.hook_names().count(), 2);
    }

    #[test]
    fn test_missing_hooks_table_is_empty() {
        let config = HookConfig::parse("{}", ConfigFormat::Json).unwrap();
        assert!(config.is_empty());

        let config = HookConfig::parse("", ConfigFormat::Toml).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_hook_names_keep_document_order() {
        let config = HookConfig::parse(
            r#"{"hooks": {"pre-push": "a", "commit-msg": "b", "pre-commit": "c"}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        let names: Vec<_> = config.hook_names().collect();
        assert_eq!(names, vec!["pre-push", "commit-msg", "pre-commit"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = HookConfig::parse(r#"{"hooks": "#, ConfigFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_first_candidate_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tego.toml"), "[hooks]\npre-commit = \"toml\"\n").unwrap();
        fs::write(
            temp.path().join("tego.json"),
            r#"{"hooks": {"pre-commit": "json"}}"#,
        )
        .unwrap();

        let source = ConfigSource::discover(temp.path()).unwrap();
        assert_eq!(source.path(), temp.path().join("tego.json"));
        assert_eq!(source.format(), ConfigFormat::Json);

        let config = HookConfig::load(temp.path()).unwrap();
        assert_eq!(config.commands("pre-commit").unwrap(), vec!["json"]);
    }

    #[test]
    fn test_tegorc_without_extension_is_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".tegorc"),
            r#"{"hooks": {"pre-push": "make test"}}"#,
        )
        .unwrap();

        let config = HookConfig::load(temp.path()).unwrap();
        assert_eq!(config.commands("pre-push").unwrap(), vec!["make test"]);
    }

    #[test]
    fn test_load_without_candidates() {
        let temp = TempDir::new().unwrap();
        let err = HookConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tego.yaml"), "hooks: [unclosed").unwrap();

        let err = HookConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("tego.yaml"));
    }

    #[test]
    fn test_broken_first_candidate_does_not_fall_through() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".tegorc.json"), "not json").unwrap();
        fs::write(temp.path().join("tego.toml"), "[hooks]\npre-commit = \"ok\"\n").unwrap();

        assert!(HookConfig::load(temp.path()).is_err());
    }

    #[test]
    fn test_write_sample() {
        let temp = TempDir::new().unwrap();
        let path = write_sample(temp.path()).unwrap();
        assert_eq!(path, temp.path().join(".tegorc.json"));

        let config = HookConfig::load(temp.path()).unwrap();
        assert_eq!(
            config.commands("commit-msg").unwrap(),
            vec!["npx commitlint --edit $1"]
        );
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_write_sample_refuses_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tego.yml"), "hooks: {}\n").unwrap();

        let err = write_sample(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigExists { .. }));
        assert!(!temp.path().join(".tegorc.json").exists());
    }

    #[test]
    fn test_from_iterator() {
        let config: HookConfig = [
            ("pre-commit".to_string(), CommandSpec::Single("true".to_string())),
            (
                "pre-push".to_string(),
                CommandSpec::Sequence(vec!["a".to_string(), "b".to_string()]),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(config.len(), 2);
        assert_eq!(config.commands("pre-push").unwrap(), vec!["a", "b"]);
        assert!(config.commands("post-merge").is_none());
    }

    #[test]
    fn test_serialize_keeps_shape() {
        let config = HookConfig::parse(
            r#"{"hooks": {"pre-commit": "make lint", "pre-push": ["a", "b"], "odd": 1}}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "hooks": {
                    "pre-commit": "make lint",
                    "pre-push": ["a", "b"],
                    "odd": null,
                }
            })
        );
    }
}
