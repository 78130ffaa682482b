//! Shared code generation utilities for the graphtype declaration generator.
//!
//! This crate turns a validated [`SchemaModel`](graphtype_schema::SchemaModel)
//! into the resolved, language-agnostic data a declaration emitter needs.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, TypeRef)
//! - [`resolve`] - Symbol table and reference handles
//! - [`mapping`] - Field type composition and custom scalars
//! - [`arguments`] - Synthesized argument container types
//! - [`pipeline`] - Phases, plugins and diagnostics
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)

pub mod arguments;
pub mod builder;
pub mod language;
pub mod mapping;
pub mod pipeline;
pub mod resolve;

pub use arguments::{SyntheticArgs, args_type_name, synthesize};
pub use builder::{CodeBuilder, CodeFragment, PrimitiveType, Renderable, TypeMapper, TypeRef};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
pub use mapping::{FieldTypeMapper, ScalarMap};
pub use resolve::{Handle, SymbolTable, TypeId, placeholder};
