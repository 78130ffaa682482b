// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod model;
mod parse;
mod sdl;
mod validate;

pub use config::{
    CONFIG_FILE, Config, DeclarationKind, EnumKeys, EnumStyle, OutputConfig, ReferenceStyle,
    SchemaConfig, TypeScriptConfig, TypenameMode,
};
pub use error::{Result, SchemaError, SourceContext};
pub use model::{
    Argument, BUILTIN_SCALARS, Deprecation, EnumVariant, Field, InputValue, ObjectBody,
    OperationRoots, OperationType, SchemaModel, SchemaType, TypeBody, TypeKind, TypeRef,
    is_builtin_scalar,
};
pub use sdl::{RawSchema, RawSchemaDefinition, parse_sdl};
pub use validate::ValidateContext;
