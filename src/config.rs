//! Runtime configuration (TOML).
//!
//! ```toml
//! # "sync" reads the calling thread's message-queue view (GetKeyState).
//! # "async" reads the physical state at call time (GetAsyncKeyState).
//! query = "async"
//! log_injections = false
//!
//! [aliases]
//! fire = "lbutton"
//! jump = 0x20
//! ```
//!
//! Aliases apply to one [`Keyboard`](crate::Keyboard) instance and take
//! precedence over the static table. The table itself is never modified.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{Error, Result};
use crate::table;

/// Which native call answers per-key state queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    Sync,
    Async,
}

/// Alias target: a numeric code or another key name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasTarget {
    Code(i64),
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub query: QueryMode,
    pub log_injections: bool,
    pub aliases: BTreeMap<String, AliasTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: QueryMode::Sync,
            log_injections: true,
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.resolve_aliases()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading keyprobe config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Normalized alias name → code.
    ///
    /// Name targets resolve against the static table only, so aliases cannot chain.
    pub fn resolve_aliases(&self) -> Result<HashMap<String, u8>> {
        let mut out = HashMap::with_capacity(self.aliases.len());
        for (alias, target) in &self.aliases {
            let key = table::normalize(alias)
                .ok_or_else(|| Error::Config(format!("empty alias name `{alias}`")))?;
            let code = match target {
                AliasTarget::Code(c) => u8::try_from(*c).map_err(|_| {
                    Error::Config(format!("alias `{alias}`: code {c} is out of range (0..=255)"))
                })?,
                AliasTarget::Name(n) => table::get_key_code(n).ok_or_else(|| {
                    Error::Config(format!("alias `{alias}`: unknown key name `{n}`"))
                })?,
            };
            if out.insert(key.clone(), code).is_some() {
                return Err(Error::Config(format!("alias `{key}` is defined twice")));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn parses_mode_and_aliases() {
        let cfg = Config::from_toml_str(
            r#"
            query = "async"
            log_injections = false

            [aliases]
            Fire = "lbutton"
            jump = 32
            "#,
        )
        .unwrap();

        assert_eq!(cfg.query, QueryMode::Async);
        assert!(!cfg.log_injections);
        let aliases = cfg.resolve_aliases().unwrap();
        assert_eq!(aliases.get("fire"), Some(&0x01));
        assert_eq!(aliases.get("jump"), Some(&0x20));
    }

    #[test]
    fn rejects_bad_aliases() {
        let err = Config::from_toml_str("[aliases]\nbig = 300\n").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("out of range")));

        let err = Config::from_toml_str("[aliases]\nx = \"nope\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("unknown key name")));

        let err = Config::from_toml_str("[aliases]\nJump = 1\njump = 2\n").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("defined twice")));
    }

    #[test]
    fn rejects_unknown_fields_and_modes() {
        assert!(matches!(
            Config::from_toml_str("speed = 3"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("query = \"sometimes\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn serializes_back_to_toml() {
        let mut cfg = Config::default();
        cfg.aliases.insert("fire".into(), AliasTarget::Code(1));
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyprobe.toml");
        std::fs::write(&path, "query = \"async\"\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().query, QueryMode::Async);
        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }
}
