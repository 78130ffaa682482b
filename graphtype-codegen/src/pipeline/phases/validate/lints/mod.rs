//! Built-in lints for schema models.

mod empty_type;
mod missing_deprecation_reason;
mod type_naming;

pub use empty_type::EmptyTypeLint;
pub use missing_deprecation_reason::MissingDeprecationReasonLint;
pub use type_naming::TypeNamingLint;
