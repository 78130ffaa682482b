//! TypeScript AST builders for declarations.
//!
//! These provide a high-level API for constructing TypeScript declarations,
//! which are then rendered via [`CodeBuilder`](graphtype_codegen::CodeBuilder).

mod doc;
mod enums;
mod interface;
mod types;

pub use doc::JsDoc;
pub use enums::{Enum, EnumMember};
pub use interface::Interface;
pub use types::{Field, ObjectType, TypeAlias, Union};
