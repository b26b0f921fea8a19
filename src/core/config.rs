use serde::Deserialize;
use std::collections::HashMap;

use crate::core::base::{Alnum, BASE62, BASE94, BINARY, Base, TableBase};
use crate::encoders::algorithms::errors::{BaseError, BaseNotFoundError, find_closest_base};

/// A base that can be looked up by name and shared between threads.
pub type DynBase = Box<dyn Base + Send + Sync>;

/// How a named base computes its digits.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    /// `0-9` then `a-z`, radix 2 through 36, case-insensitive decoding.
    Alnum,
    /// `0-9`, `a-z`, `A-Z`.
    Base62,
    /// Printable ASCII `!` through `~`.
    Base94,
    /// Raw bytes, radix 256.
    #[serde(alias = "bin")]
    Binary,
    /// Explicit digit string.
    Table,
}

impl BaseKind {
    fn as_str(self) -> &'static str {
        match self {
            BaseKind::Alnum => "alnum",
            BaseKind::Base62 => "base62",
            BaseKind::Base94 => "base94",
            BaseKind::Binary => "binary",
            BaseKind::Table => "table",
        }
    }
}

/// Configuration for a single named base loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BaseConfig {
    pub kind: BaseKind,
    /// Radix for `alnum` bases
    #[serde(default)]
    pub radix: Option<u32>,
    /// Ordered digits for `table` bases
    #[serde(default)]
    pub digits: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BaseConfig {
    /// Shorthand for an alphanumeric base entry.
    pub fn alnum(radix: u32) -> Self {
        BaseConfig {
            kind: BaseKind::Alnum,
            radix: Some(radix),
            digits: None,
            description: None,
        }
    }

    /// Constructs the base this entry describes.
    pub fn build(&self) -> Result<DynBase, BaseError> {
        let base: DynBase = match self.kind {
            BaseKind::Alnum => {
                let radix = self.radix.ok_or(BaseError::MissingField {
                    kind: self.kind.as_str(),
                    field: "radix",
                })?;
                Box::new(Alnum::new(radix)?)
            }
            BaseKind::Base62 => Box::new(BASE62),
            BaseKind::Base94 => Box::new(BASE94),
            BaseKind::Binary => Box::new(BINARY),
            BaseKind::Table => {
                let digits = self.digits.as_deref().ok_or(BaseError::MissingField {
                    kind: self.kind.as_str(),
                    field: "digits",
                })?;
                if let Some((position, symbol)) =
                    digits.chars().enumerate().find(|(_, c)| !c.is_ascii())
                {
                    return Err(BaseError::NonAsciiDigit { symbol, position });
                }
                Box::new(TableBase::new(digits)?)
            }
        };
        Ok(base)
    }

    /// Radix as declared, without constructing the base.
    pub fn radix(&self) -> Option<u32> {
        match self.kind {
            BaseKind::Alnum => self.radix,
            BaseKind::Base62 => Some(62),
            BaseKind::Base94 => Some(94),
            BaseKind::Binary => Some(256),
            BaseKind::Table => self.digits.as_ref().map(|d| d.len() as u32),
        }
    }
}

/// Global settings for basexx.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Base used when `--from` is omitted
    #[serde(default)]
    pub default_from: Option<String>,
    /// Base used when `--to` is omitted
    #[serde(default)]
    pub default_to: Option<String>,
}

/// Named bases loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct BaseRegistry {
    /// Map of base names to their configurations
    #[serde(default)]
    pub bases: HashMap<String, BaseConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl BaseRegistry {
    /// Parses base configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in bases.
    ///
    /// Besides the entries in the bundled `bases.toml`, this registers
    /// `a2` through `a36` for every alphanumeric radix.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../bases.toml");
        let mut registry = Self::from_toml(content)?;
        for radix in 2..=36 {
            registry
                .bases
                .entry(format!("a{}", radix))
                .or_insert_with(|| BaseConfig::alnum(radix));
        }
        Ok(registry)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in bases
    /// 2. `~/.config/basexx/bases.toml`
    /// 3. `./bases.toml`
    ///
    /// Later configurations override earlier ones for matching names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("basexx").join("bases.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("bases.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!(
                    "loaded {} base(s) from {}",
                    overrides.bases.len(),
                    path.display()
                );
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Bases from `other` replace bases with the same name in `self`; settings
    /// are replaced field by field when `other` sets them.
    pub fn merge(&mut self, other: BaseRegistry) {
        self.bases.extend(other.bases);
        if other.settings.default_from.is_some() {
            self.settings.default_from = other.settings.default_from;
        }
        if other.settings.default_to.is_some() {
            self.settings.default_to = other.settings.default_to;
        }
    }

    /// Retrieves a base configuration by name.
    pub fn get_base(&self, name: &str) -> Option<&BaseConfig> {
        self.bases.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bases.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolves a name to a ready-to-use base.
    ///
    /// Unknown names produce a [`BaseNotFoundError`] with the closest
    /// registered name as a suggestion.
    pub fn base(&self, name: &str) -> Result<DynBase, Box<dyn std::error::Error>> {
        let config = self.get_base(name).ok_or_else(|| {
            let suggestion = find_closest_base(name, &self.names());
            BaseNotFoundError::new(name, suggestion)
        })?;
        config
            .build()
            .map_err(|e| format!("invalid base '{}': {}", name, e).into())
    }
}
