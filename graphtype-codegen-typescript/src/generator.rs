//! TypeScript declaration generator.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use eyre::{Result, bail};
use graphtype_codegen::{
    CodeFragment, FieldTypeMapper, Handle, Renderable, ScalarMap, SymbolTable, SyntheticArgs,
    TypeMapper,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    resolve::PLACEHOLDER_MAP,
};
use graphtype_core::{File, WriteResult};
use graphtype_schema::{
    Config, DeclarationKind, Deprecation, EnumKeys, EnumStyle, EnumVariant, InputValue,
    ReferenceStyle, TypeBody, TypeScriptConfig, TypenameMode,
};
use rayon::prelude::*;

use crate::{
    ast::{Enum, EnumMember, Field, Interface, JsDoc, ObjectType, TypeAlias, Union},
    code_file::CodeFile,
    naming::TS_NAMING,
    type_mapper::{Position, TypeScriptTypeMapper},
};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by graphtype. DO NOT EDIT.\n";

/// One top-level declaration of the output file.
#[derive(Debug, Clone, Copy)]
enum Declaration<'g> {
    Type(Handle<'g>),
    Args(&'g SyntheticArgs),
}

/// TypeScript generator that renders one declaration file for a schema.
pub struct Generator {
    ctx: CompilationContext,
    options: TypeScriptConfig,
    scalars: ScalarMap,
    output: PathBuf,
    output_mapper: TypeScriptTypeMapper,
    input_mapper: TypeScriptTypeMapper,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let file = self.file(&self.output)?;
        Ok(vec![PreviewFile {
            path: self.output.display().to_string(),
            content: file.render(),
        }])
    }

    fn generate(&self, output: &Path) -> Result<GenerateResult> {
        let file = self.file(output)?;
        let mut result = GenerateResult::default();
        match file.write()? {
            WriteResult::Written => result.written.push(output.to_path_buf()),
            WriteResult::Unchanged => result.unchanged.push(output.to_path_buf()),
        }
        Ok(result)
    }
}

impl Generator {
    /// Create a generator from a completed pipeline run.
    ///
    /// The context must have been through the resolve and synthesize phases.
    pub fn from_context(
        ctx: CompilationContext,
        options: TypeScriptConfig,
        scalars: ScalarMap,
    ) -> Result<Self> {
        check_declared_names(&ctx)?;
        for scalar in scalars.unused(ctx.symbols()?) {
            tracing::warn!(scalar, "configured scalar is not declared in the schema");
        }

        let output_mapper = TypeScriptTypeMapper::new(Position::Output)
            .immutable(options.immutable_types)
            .references(options.references);
        let input_mapper = output_mapper.with_position(Position::Input);

        Ok(Self {
            ctx,
            options,
            scalars,
            output: PathBuf::from("types.ts"),
            output_mapper,
            input_mapper,
        })
    }

    /// Create a generator configured by `graphtype.toml`.
    pub fn from_config(ctx: CompilationContext, config: &Config) -> Result<Self> {
        let generator = Self::from_context(
            ctx,
            config.typescript.clone(),
            ScalarMap::from(config.scalars.clone()),
        )?;
        Ok(generator.with_output(config.output_path()))
    }

    /// Path reported by [`LanguageCodegen::preview`].
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn context(&self) -> &CompilationContext {
        &self.ctx
    }

    /// Render the declaration file, without the generated-file header.
    pub fn render(&self) -> Result<String> {
        let declarations = self.declarations()?;

        // Each declaration only reads shared data; collect keeps input order.
        let rendered = declarations
            .par_iter()
            .map(|declaration| self.render_declaration(*declaration))
            .collect::<Result<Vec<_>>>()?;

        let mut file = CodeFile::new().add(self.preamble()).add_all(rendered);
        if self.options.references == ReferenceStyle::Placeholder {
            file = file.add(self.binding_map()?);
        }

        tracing::debug!(declarations = declarations.len(), "rendered declarations");
        Ok(file.render())
    }

    fn file(&self, path: &Path) -> Result<File> {
        Ok(File::new(path, self.render()?).with_header(GENERATED_HEADER))
    }

    fn symbols(&self) -> Result<&SymbolTable> {
        self.ctx.symbols()
    }

    /// Declarations in schema order, each argument container right after
    /// the type that declares its field.
    fn declarations(&self) -> Result<Vec<Declaration<'_>>> {
        let mut by_parent: HashMap<&str, Vec<&SyntheticArgs>> = HashMap::new();
        for args in self.ctx.arguments()? {
            by_parent.entry(args.parent.as_str()).or_default().push(args);
        }

        let mut declarations = Vec::new();
        for handle in self.symbols()?.declared() {
            declarations.push(Declaration::Type(handle));
            if let Some(args) = by_parent.remove(handle.name()) {
                declarations.extend(args.into_iter().map(Declaration::Args));
            }
        }
        Ok(declarations)
    }

    fn render_declaration(&self, declaration: Declaration<'_>) -> Result<Vec<CodeFragment>> {
        match declaration {
            Declaration::Type(handle) => self.render_type(handle),
            Declaration::Args(args) => {
                tracing::trace!(name = %args.name, "rendering argument container");
                let fields = args
                    .arguments
                    .iter()
                    .map(|arg| self.input_field(arg))
                    .collect::<Result<Vec<_>>>()?;
                Ok(self.record(&TS_NAMING.type_name(&args.name), None, fields))
            }
        }
    }

    fn render_type(&self, handle: Handle<'_>) -> Result<Vec<CodeFragment>> {
        let ty = handle.get();
        let name = TS_NAMING.type_name(&ty.name);
        let doc = self.doc(ty.description.as_deref(), None, None);
        tracing::trace!(name = %ty.name, kind = %ty.kind(), "rendering declaration");

        let fragments = match &ty.body {
            TypeBody::Object(body) => {
                let fields = body
                    .fields
                    .iter()
                    .map(|field| self.output_field(field))
                    .collect::<Result<Vec<_>>>()?;
                let typename = self.typename_field(&ty.name);
                self.record(&name, doc, typename.into_iter().chain(fields))
            }
            TypeBody::Interface(body) => {
                let fields = body
                    .fields
                    .iter()
                    .map(|field| self.output_field(field))
                    .collect::<Result<Vec<_>>>()?;
                self.record(&name, doc, fields)
            }
            TypeBody::Union(members) => Union::new(name)
                .doc(doc)
                .variants(members.iter().map(|m| self.output_mapper.map_named(m)))
                .to_fragments(),
            TypeBody::Enum(variants) => self.enumeration(&name, doc, variants)?,
            TypeBody::InputObject(fields) => {
                let fields = fields
                    .iter()
                    .map(|field| self.input_field(field))
                    .collect::<Result<Vec<_>>>()?;
                self.record(&name, doc, fields)
            }
            TypeBody::Scalar { .. } => {
                let target = self.scalars.target(&ty.name);
                TypeAlias::new(name, self.output_mapper.render_type(&target))
                    .doc(doc)
                    .to_fragments()
            }
        };

        Ok(fragments)
    }

    /// An object-shaped declaration in the configured declaration kind.
    fn record(
        &self,
        name: &str,
        doc: Option<String>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Vec<CodeFragment> {
        match self.options.declaration_kind {
            DeclarationKind::Type => ObjectType::new(name).doc(doc).fields(fields).to_fragments(),
            DeclarationKind::Interface => {
                Interface::new(name).doc(doc).fields(fields).to_fragments()
            }
        }
    }

    fn typename_field(&self, type_name: &str) -> Option<Field> {
        let field = Field::new("__typename", format!("'{}'", type_name))
            .readonly_if(self.options.immutable_types);
        match self.options.typename {
            TypenameMode::Optional => Some(field.optional()),
            TypenameMode::Required => Some(field),
            TypenameMode::Skip => None,
        }
    }

    fn output_field(&self, field: &graphtype_schema::Field) -> Result<Field> {
        let ty = FieldTypeMapper::new(self.symbols()?).map(&field.ty)?;
        Ok(Field::new(&field.name, self.output_mapper.render_type(&ty))
            .optional_if(ty.is_optional() && !self.options.avoid_optionals)
            .readonly_if(self.options.immutable_types)
            .doc(self.doc(
                field.description.as_deref(),
                field.deprecation.as_ref(),
                None,
            )))
    }

    fn input_field(&self, value: &InputValue) -> Result<Field> {
        let ty = FieldTypeMapper::new(self.symbols()?).map(&value.ty)?;
        Ok(Field::new(&value.name, self.input_mapper.render_type(&ty))
            .optional_if(ty.is_optional() && !self.options.avoid_optionals)
            .readonly_if(self.options.immutable_types)
            .doc(self.doc(
                value.description.as_deref(),
                value.deprecation.as_ref(),
                value.default_value.as_deref(),
            )))
    }

    fn enumeration(
        &self,
        name: &str,
        doc: Option<String>,
        variants: &[EnumVariant],
    ) -> Result<Vec<CodeFragment>> {
        if self.options.enums == EnumStyle::Union {
            return Ok(Union::new(name)
                .doc(doc)
                .variants(variants.iter().map(|v| format!("'{}'", v.name)))
                .to_fragments());
        }

        let mut keys = HashSet::new();
        let mut members = Vec::with_capacity(variants.len());
        for variant in variants {
            let key = match self.options.enum_keys {
                EnumKeys::Keep => variant.name.clone(),
                EnumKeys::Pascal => TS_NAMING.enum_key(&variant.name),
            };
            if !keys.insert(key.clone()) {
                bail!(
                    "enum '{}' has more than one member with key '{}' (try enum_keys = \"keep\")",
                    name,
                    key
                );
            }
            let doc = self.doc(
                variant.description.as_deref(),
                variant.deprecation.as_ref(),
                None,
            );
            members.push(EnumMember::new(key, &variant.name).doc(doc));
        }

        Ok(Enum::new(name).doc(doc).members(members).to_fragments())
    }

    fn doc(
        &self,
        description: Option<&str>,
        deprecation: Option<&Deprecation>,
        default_value: Option<&str>,
    ) -> Option<String> {
        let mut doc = JsDoc::new();
        if self.options.descriptions {
            doc = doc.text(description);
        }
        if let Some(deprecation) = deprecation {
            doc = doc.tag("deprecated", deprecation.reason.as_deref());
        }
        if let Some(value) = default_value {
            doc = doc.tag("defaultValue", Some(value));
        }
        doc.build()
    }

    /// `Maybe` and `InputMaybe` helpers every declaration relies on.
    fn preamble(&self) -> Vec<CodeFragment> {
        let maybe = TypeAlias::new("Maybe<T>", self.options.maybe_value.as_str());
        let input_maybe = TypeAlias::new("InputMaybe<T>", "Maybe<T>");
        maybe
            .to_fragments()
            .into_iter()
            .chain(input_maybe.to_fragments())
            .collect()
    }

    /// `$Types`: binds every placeholder key to its declaration.
    fn binding_map(&self) -> Result<ObjectType> {
        let fields = self
            .symbols()?
            .declared()
            .map(|handle| Field::new(handle.name(), TS_NAMING.type_name(handle.name())));
        Ok(ObjectType::new(PLACEHOLDER_MAP)
            .doc(Some(format!(
                "Resolves `{}['Name']` references to their declarations.",
                PLACEHOLDER_MAP
            )))
            .fields(fields))
    }
}

/// Escaping must not map two schema names onto one TypeScript symbol
/// (`Maybe` and `_Maybe` would both declare `_Maybe`).
fn check_declared_names(ctx: &CompilationContext) -> Result<()> {
    let model = &ctx.model;
    let types = model.declared_types().map(|ty| (ty.name.as_str(), ty.span));
    let containers = ctx.arguments()?.iter().map(|args| {
        let span = model
            .get(&args.parent)
            .and_then(|parent| parent.field(&args.field))
            .and_then(|field| field.span);
        (args.name.as_str(), span)
    });

    let mut declared = HashMap::new();
    for (name, span) in types.chain(containers) {
        let symbol = TS_NAMING.type_name(name);
        if let Some(first) = declared.insert(symbol.clone(), span) {
            return Err(eyre::Report::new(
                model.source().duplicate_type(symbol, first, span),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use graphtype_codegen::pipeline::Pipeline;

    use super::*;

    fn generator(sdl: &str, options: TypeScriptConfig) -> Generator {
        let model = sdl.parse().expect("valid schema");
        let ctx = Pipeline::new().run(model).expect("pipeline should succeed");
        Generator::from_context(ctx, options, ScalarMap::new()).expect("generator")
    }

    #[test]
    fn test_requires_completed_pipeline() {
        let model = "type Query { hero: String }".parse().unwrap();
        let ctx = CompilationContext::new(model);
        assert!(
            Generator::from_context(ctx, TypeScriptConfig::default(), ScalarMap::new()).is_err()
        );
    }

    #[test]
    fn test_escaped_name_clash_is_duplicate_type() {
        let model = r#"
            type Maybe { a: String }
            type _Maybe { b: String }
            type Query { m: Maybe n: _Maybe }
        "#
        .parse()
        .unwrap();
        let ctx = Pipeline::new().run(model).unwrap();

        let result = Generator::from_context(ctx, TypeScriptConfig::default(), ScalarMap::new());
        let Err(err) = result else {
            panic!("clashing declarations should be rejected");
        };
        let schema_err = err
            .downcast_ref::<Box<graphtype_schema::SchemaError>>()
            .expect("schema error");
        assert_eq!(schema_err.kind(), "duplicate-type-name");
        assert!(schema_err.to_string().contains("'_Maybe'"));
    }

    #[test]
    fn test_escaped_name_without_clash_is_declared_once() {
        let output = generator(
            "type Maybe { a: String } type Query { m: Maybe }",
            TypeScriptConfig::default(),
        )
        .render()
        .unwrap();
        assert_eq!(output.matches("export type _Maybe = {").count(), 1);
        assert!(output.contains("  Maybe: _Maybe;\n"));
    }

    #[test]
    fn test_arguments_follow_parent() {
        let generator = generator(
            r#"
            type Query { search(text: String): String }
            type Droid { name: String }
            "#,
            TypeScriptConfig::default(),
        );
        let names: Vec<_> = generator
            .declarations()
            .unwrap()
            .into_iter()
            .map(|d| match d {
                Declaration::Type(handle) => handle.name().to_string(),
                Declaration::Args(args) => args.name.clone(),
            })
            .collect();
        assert_eq!(names, ["Query", "QuerySearchArgs", "Droid"]);
    }

    #[test]
    fn test_pascal_enum_key_collision() {
        let options = TypeScriptConfig {
            enum_keys: EnumKeys::Pascal,
            ..TypeScriptConfig::default()
        };
        let generator = generator(
            "type Query { e: Episode } enum Episode { NEW_HOPE NewHope }",
            options,
        );
        let err = generator.render().unwrap_err();
        assert!(err.to_string().contains("NewHope"));
    }

    #[test]
    fn test_language() {
        let generator = generator("type Query { hero: String }", TypeScriptConfig::default());
        assert_eq!(generator.language(), "typescript");
        assert_eq!(generator.file_extension(), "ts");
    }
}
