//! Schema loading from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Result, SchemaError, model::SchemaModel, sdl::{RawSchema, parse_sdl}, validate};

impl FromStr for SchemaModel {
    type Err = Box<SchemaError>;

    fn from_str(s: &str) -> Result<Self> {
        SchemaModel::from_sdl(s, "schema.graphql")
    }
}

impl SchemaModel {
    /// Parse and validate SDL text.
    pub fn from_sdl(src: &str, filename: &str) -> Result<Self> {
        Self::from_raw(parse_sdl(src, filename)?)
    }

    /// Read, parse and validate a `.graphql` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(SchemaError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_sdl(&content, &path.display().to_string())
    }

    /// Validate a schema built in memory.
    pub fn from_raw(raw: RawSchema) -> Result<Self> {
        validate::validate(raw)
    }
}
