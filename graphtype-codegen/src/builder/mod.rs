//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indentation-aware text buffer
//! - [`CodeFragment`] / [`Renderable`] - what AST nodes render to
//! - [`TypeRef`] / [`TypeMapper`] - language-agnostic type expressions and
//!   their per-language spelling

mod code_builder;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
