//! TypeScript declaration emitter for the graphtype generator.
//!
//! This crate renders a resolved GraphQL schema as one TypeScript file of
//! type declarations.
//!
//! # Usage
//!
//! ```ignore
//! use graphtype_codegen::pipeline::Pipeline;
//! use graphtype_codegen_typescript::{Generator, LanguageCodegen};
//! use graphtype_schema::{Config, SchemaModel};
//!
//! let config = Config::from_file("graphtype.toml")?;
//! let model = SchemaModel::from_file(config.schema_path())?;
//! let ctx = Pipeline::new().run(model)?;
//! let generator = Generator::from_config(ctx, &config)?;
//!
//! // Preview without writing
//! let files = generator.preview()?;
//!
//! // Write the declaration file
//! let result = generator.generate(&config.output_path())?;
//! ```
//!
//! # Generated Output
//!
//! - `Maybe<T>` / `InputMaybe<T>` helpers
//! - one declaration per schema type, in schema order, with argument
//!   containers (`QuerySearchArgs`) right after their parent
//! - the `$Types` binding map when placeholder references are enabled

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::{GENERATED_HEADER, Generator};
pub use graphtype_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::TS_NAMING;
pub use type_mapper::{Position, TypeScriptTypeMapper};
