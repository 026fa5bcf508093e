use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 5-7-5
pub const DEFAULT_RULE: [u32; 3] = [5, 7, 5];

pub trait Configuration {
    /// Mora count of every segment, in order
    fn get_rule(&self) -> &[u32];
    /// Lexicon used by the bundled analyzer
    fn get_lexicon(&self) -> Option<&Path>;
    /// Optional custom vocabulary
    fn get_user_dictionary(&self) -> Option<&Path>;
}

fn default_rule() -> Vec<u32> {
    DEFAULT_RULE.to_vec()
}

/// Configuration read from a YAML file:
///
/// ```yaml
/// rule: [5, 7, 5]
/// lexicon: lexicon.yaml
/// user_dictionary: udic.csv
/// ```
///
/// Relative paths are resolved against the directory of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlConfiguration {
    #[serde(default = "default_rule")]
    pub rule: Vec<u32>,
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
    #[serde(default)]
    pub user_dictionary: Option<PathBuf>,
}

impl Default for YamlConfiguration {
    fn default() -> Self {
        YamlConfiguration {
            rule: default_rule(),
            lexicon: None,
            user_dictionary: None,
        }
    }
}

impl YamlConfiguration {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::resource_load(path, e))?;
        let mut cfg = Self::from_yaml_str(&content).map_err(|e| Error::resource_load(path, e))?;
        if let Some(base) = path.parent() {
            cfg.lexicon = cfg.lexicon.map(|p| base.join(p));
            cfg.user_dictionary = cfg.user_dictionary.map(|p| base.join(p));
        }
        info!("load configuration {}: rule = {:?}", path.display(), cfg.rule);
        Ok(cfg)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl Configuration for YamlConfiguration {
    fn get_rule(&self) -> &[u32] {
        &self.rule
    }

    fn get_lexicon(&self) -> Option<&Path> {
        self.lexicon.as_deref()
    }

    fn get_user_dictionary(&self) -> Option<&Path> {
        self.user_dictionary.as_deref()
    }
}

/// Per call options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opt {
    pub udic: Option<PathBuf>,
}

impl Opt {
    pub fn with_udic<P: Into<PathBuf>>(udic: P) -> Self {
        Opt {
            udic: Some(udic.into()),
        }
    }

    pub fn from_config(cfg: &dyn Configuration) -> Self {
        Opt {
            udic: cfg.get_user_dictionary().map(Path::to_path_buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let cfg = YamlConfiguration::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, YamlConfiguration::default());
        assert_eq!(cfg.get_rule(), &DEFAULT_RULE);
        assert!(cfg.get_lexicon().is_none());
        assert_eq!(Opt::from_config(&cfg), Opt::default());
    }

    #[test]
    fn custom_rule() {
        let cfg = YamlConfiguration::from_yaml_str("rule: [5, 7, 5, 7, 7]\n").unwrap();
        assert_eq!(cfg.get_rule(), &[5, 7, 5, 7, 7]);
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("senryu.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"lexicon: lexicon.yaml\nuser_dictionary: /abs/udic.csv\n")
            .unwrap();

        let cfg = YamlConfiguration::load(&path).unwrap();
        assert_eq!(cfg.get_lexicon(), Some(dir.path().join("lexicon.yaml").as_path()));
        assert_eq!(cfg.get_user_dictionary(), Some(Path::new("/abs/udic.csv")));
        assert_eq!(Opt::from_config(&cfg), Opt::with_udic("/abs/udic.csv"));
    }

    #[test]
    fn load_rejects_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "rule: five").unwrap();
        assert!(YamlConfiguration::load(&path).is_err());
        assert!(YamlConfiguration::load(dir.path().join("missing.yaml")).is_err());
    }
}
