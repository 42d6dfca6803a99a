use std::{
   io::{self, Write},
   path::Path,
};

use serde::Deserialize;

use crate::{
   error::{ChangelogError, Result},
   style,
};

/// Fixed config filename, looked up in the current directory
pub const CONFIG_PATH: &str = ".changelogrc.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
   pub project:    ProjectConfig,
   pub git:        GitConfig,
   pub output:     OutputConfig,
   pub ai:         AiConfig,
   /// Informational only: shown by `changelog show`, not consulted by
   /// classification or rendering
   pub categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
   pub name:    String,
   pub version: String,
}

impl Default for ProjectConfig {
   fn default() -> Self {
      Self { name: "My Project".to_string(), version: "1.0.0".to_string() }
   }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitConfig {
   pub repository_path: String,
   pub default_branch:  String,
}

impl Default for GitConfig {
   fn default() -> Self {
      Self { repository_path: ".".to_string(), default_branch: "main".to_string() }
   }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
   pub format:   String,
   pub filename: String,
}

impl Default for OutputConfig {
   fn default() -> Self {
      Self { format: "markdown".to_string(), filename: "CHANGELOG.md".to_string() }
   }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
   pub enabled:  bool,
   pub provider: String,
   pub model:    String,
}

impl Default for AiConfig {
   fn default() -> Self {
      Self {
         enabled:  false,
         provider: "claude".to_string(),
         model:    "claude-haiku-4-5".to_string(),
      }
   }
}

impl Config {
   /// Load config from a YAML file
   pub fn load(path: &str) -> Result<Self> {
      let contents = std::fs::read_to_string(path)
         .map_err(|e| ChangelogError::ConfigError(format!("failed to read {path}: {e}")))?;
      let config: Self = serde_yaml::from_str(&contents)
         .map_err(|e| ChangelogError::ConfigError(format!("failed to parse {path}: {e}")))?;
      Ok(config)
   }

   /// The commented template written by `changelog init`
   pub const fn default_yaml() -> &'static str {
      r#"# Changelog Generator Configuration

# Your project information
project:
  name: "My Project"
  version: "1.0.0"

# Git repository settings
git:
  repository_path: "."
  default_branch: "main"

# Output settings
output:
  format: "markdown"
  filename: "CHANGELOG.md"

# AI settings
ai:
  enabled: false
  provider: "claude"
  model: "claude-haiku-4-5"

# Categories for changes
categories:
  - breaking
  - features
  - fixes
  - documentation
"#
   }
}

/// Run the `init` subcommand: write the default config template,
/// prompting before overwriting an existing file.
pub fn run_init() -> Result<()> {
   println!("Initializing changelog configuration...");
   println!();

   if Path::new(CONFIG_PATH).exists() {
      println!("{CONFIG_PATH} already exists!");
      print!("Overwrite? (y/N): ");
      io::stdout().flush()?;

      let mut response = String::new();
      io::stdin().read_line(&mut response)?;

      if !matches!(response.trim(), "y" | "Y") {
         println!("Cancelled.");
         return Ok(());
      }
   }

   std::fs::write(CONFIG_PATH, Config::default_yaml())?;

   println!("{} Created {CONFIG_PATH}", style::success(style::icons::SUCCESS));
   println!();
   println!("Next steps:");
   println!("  1. Edit {CONFIG_PATH} to set your preferences");
   println!("  2. Run 'changelog generate' to create your first changelog");
   Ok(())
}

/// Run the `show` subcommand: load and pretty-print the config.
pub fn run_show() -> Result<()> {
   let config = Config::load(CONFIG_PATH)?;

   println!("{}", style::bold("Current Configuration:"));
   println!();
   println!("  Project: {} (v{})", config.project.name, config.project.version);
   println!("  Repository: {}", config.git.repository_path);
   println!("  Branch: {}", config.git.default_branch);
   println!("  Output: {} ({})", config.output.filename, config.output.format);
   println!("  AI: {} ({}, {})", config.ai.enabled, config.ai.provider, config.ai.model);
   println!("  Categories: {}", config.categories.join(", "));
   Ok(())
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_parse_full_config() {
      let yaml = r#"
project:
  name: "Demo"
  version: "2.1.0"
git:
  repository_path: "/tmp/repo"
  default_branch: "master"
output:
  format: "markdown"
  filename: "NOTES.md"
ai:
  enabled: true
  provider: "claude"
  model: "claude-haiku-4-5"
categories:
  - breaking
  - features
"#;
      let config: Config = serde_yaml::from_str(yaml).unwrap();
      assert_eq!(config.project.name, "Demo");
      assert_eq!(config.project.version, "2.1.0");
      assert_eq!(config.git.repository_path, "/tmp/repo");
      assert_eq!(config.git.default_branch, "master");
      assert_eq!(config.output.filename, "NOTES.md");
      assert!(config.ai.enabled);
      assert_eq!(config.categories, vec!["breaking", "features"]);
   }

   #[test]
   fn test_parse_partial_config_uses_defaults() {
      let yaml = r#"
project:
  name: "Demo"
"#;
      let config: Config = serde_yaml::from_str(yaml).unwrap();
      assert_eq!(config.project.name, "Demo");
      // Absent sections fall back to defaults
      assert_eq!(config.git.repository_path, ".");
      assert_eq!(config.output.filename, "CHANGELOG.md");
      assert!(!config.ai.enabled);
      assert!(config.categories.is_empty());
   }

   #[test]
   fn test_default_yaml_round_trips() {
      let config: Config = serde_yaml::from_str(Config::default_yaml()).unwrap();
      assert_eq!(config.project.name, "My Project");
      assert_eq!(config.output.filename, "CHANGELOG.md");
      assert_eq!(config.ai.provider, "claude");
      assert_eq!(config.categories.len(), 4);
   }

   #[test]
   fn test_malformed_yaml_rejected() {
      let err = serde_yaml::from_str::<Config>("project: [not, a, mapping]").unwrap_err();
      // Struct shape mismatch surfaces as a parse error
      assert!(err.to_string().contains("invalid type"));
   }

   #[test]
   fn test_load_missing_file_is_config_error() {
      let err = Config::load("/nonexistent/.changelogrc.yaml").unwrap_err();
      assert!(matches!(err, ChangelogError::ConfigError(_)));
      assert!(err.hint().is_some());
   }
}
