//! Resolve phase - builds the symbol table.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    resolve::SymbolTable,
};

/// Phase that indexes the whole model before anything is mapped.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Index every schema type into the symbol table"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let symbols = SymbolTable::build(ctx.model.clone());
        tracing::debug!(types = symbols.len(), "symbol table built");
        ctx.symbols = Some(symbols);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_populates_symbols() {
        let model = "type Query { hero: Droid } type Droid { friends: [Droid] }"
            .parse()
            .unwrap();
        let mut ctx = CompilationContext::new(model);

        ResolvePhase.run(&mut ctx).unwrap();

        let symbols = ctx.symbols().unwrap();
        assert!(symbols.resolve("Droid").is_ok());
        assert!(symbols.resolve("Query").is_ok());
    }
}
