//! Symbol table and reference handles.
//!
//! The table indexes every type of a validated model before any mapping or
//! emission starts. References are resolved to [`Handle`]s: small copyable
//! lookups into the table that always dereference to the one canonical
//! [`SchemaType`] for a name. Nothing is ever expanded eagerly, so a type
//! that reaches itself through its own fields costs one lookup.

use std::{collections::HashMap, fmt, sync::Arc};

use graphtype_schema::{Result, SchemaModel, SchemaType, TypeKind};

/// Prefix of every placeholder reference.
pub const PLACEHOLDER_MAP: &str = "$Types";

/// The placeholder spelling of a reference to `name`.
///
/// `$` cannot appear in a schema name, so a placeholder never collides
/// with a declaration. The binding map `$Types` maps each key back to the
/// declared symbol.
pub fn placeholder(name: &str) -> String {
    format!("{}['{}']", PLACEHOLDER_MAP, name)
}

/// Position of a type in the symbol table arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name to type index over an entire schema.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    model: Arc<SchemaModel>,
    by_name: HashMap<String, TypeId>,
}

impl SymbolTable {
    /// Index every type in the model, built-in scalars included.
    pub fn build(model: Arc<SchemaModel>) -> Self {
        let by_name = model
            .types()
            .enumerate()
            .map(|(index, ty)| (ty.name.clone(), TypeId(index as u32)))
            .collect();
        Self { model, by_name }
    }

    pub fn model(&self) -> &SchemaModel {
        &self.model
    }

    /// Resolve a name to its handle.
    ///
    /// The same name always yields an equal handle, whatever was resolved
    /// before it.
    pub fn resolve(&self, name: &str) -> Result<Handle<'_>> {
        self.by_name
            .get(name)
            .and_then(|id| self.handle(*id))
            .ok_or_else(|| self.model.source().unknown_type(name, "the symbol table", None))
    }

    /// Handle for an id, if it belongs to this table.
    pub fn handle(&self, id: TypeId) -> Option<Handle<'_>> {
        self.model
            .get_index(id.index())
            .map(|ty| Handle { id, ty })
    }

    /// Handles for declared (non built-in) types, in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = Handle<'_>> {
        self.model
            .types()
            .enumerate()
            .filter(|(_, ty)| !ty.is_builtin())
            .map(|(index, ty)| Handle {
                id: TypeId(index as u32),
                ty,
            })
    }

    /// Number of indexed types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// A resolved reference to one schema type.
#[derive(Debug, Clone, Copy)]
pub struct Handle<'t> {
    id: TypeId,
    ty: &'t SchemaType,
}

impl<'t> Handle<'t> {
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The canonical declaration.
    pub fn get(&self) -> &'t SchemaType {
        self.ty
    }

    pub fn name(&self) -> &'t str {
        &self.ty.name
    }

    pub fn kind(&self) -> TypeKind {
        self.ty.kind()
    }

    /// Placeholder spelling of a reference to this type.
    pub fn placeholder(&self) -> String {
        placeholder(self.name())
    }
}

impl PartialEq for Handle<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle<'_> {}
