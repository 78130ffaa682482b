//! `graphtype.toml` parsing.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, SchemaError, error::SourceContext};

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "graphtype.toml";

/// Root of `graphtype.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub schema: SchemaConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub typescript: TypeScriptConfig,

    /// Custom scalar name to TypeScript type expression.
    #[serde(default)]
    pub scalars: IndexMap<String, String>,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("types.ts")
}

/// Emitter options in `[typescript]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptConfig {
    pub declaration_kind: DeclarationKind,
    pub enums: EnumStyle,
    pub enum_keys: EnumKeys,
    pub typename: TypenameMode,
    pub references: ReferenceStyle,
    /// Emit `readonly` fields and `ReadonlyArray` lists.
    pub immutable_types: bool,
    /// Emit schema descriptions as JSDoc.
    pub descriptions: bool,
    /// Drop the `?` on nullable fields and arguments. Values stay `Maybe<T>`.
    pub avoid_optionals: bool,
    /// Body of the `Maybe<T>` helper.
    pub maybe_value: String,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            declaration_kind: DeclarationKind::default(),
            enums: EnumStyle::default(),
            enum_keys: EnumKeys::default(),
            typename: TypenameMode::default(),
            references: ReferenceStyle::default(),
            immutable_types: false,
            descriptions: true,
            avoid_optionals: false,
            maybe_value: "T | null".to_string(),
        }
    }
}

/// Whether object shapes are `type X = { ... }` or `interface X { ... }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Type,
    Interface,
}

/// How enums are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumStyle {
    /// `export enum Episode { JEDI = 'JEDI' }`
    #[default]
    Enum,
    /// `export type Episode = 'JEDI' | 'EMPIRE'`
    Union,
}

/// How enum member keys are named. Values always keep the schema label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumKeys {
    #[default]
    Keep,
    Pascal,
}

/// Whether objects carry a `__typename` discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypenameMode {
    #[default]
    Optional,
    Required,
    Skip,
}

/// How references between declarations are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStyle {
    /// `$Types['Character']`, bound once by a `$Types` map.
    #[default]
    Placeholder,
    /// `Character`
    Direct,
}

impl FromStr for Config {
    type Err = Box<SchemaError>;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Config for a bare schema path, with every option at its default.
    pub fn for_schema(path: impl Into<PathBuf>) -> Self {
        Self {
            schema: SchemaConfig { path: path.into() },
            output: OutputConfig::default(),
            typescript: TypeScriptConfig::default(),
            scalars: IndexMap::new(),
            base_dir: PathBuf::new(),
        }
    }

    /// Parse a `graphtype.toml` file. Relative paths resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(SchemaError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse config text with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| source.config_error(e))
    }

    /// Schema path, resolved against the config file's directory.
    pub fn schema_path(&self) -> PathBuf {
        self.base_dir.join(&self.schema.path)
    }

    /// Output path, resolved against the config file's directory.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output.path)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
