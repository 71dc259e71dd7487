pub fn run() {
    let dialects = astgraft_dialects::all();
    println!("Built-in dialects ({}):", dialects.len());
    for dialect in dialects {
        let aliases: Vec<&str> = dialect
            .aliases
            .iter()
            .copied()
            .filter(|alias| *alias != dialect.name)
            .collect();
        if aliases.is_empty() {
            println!(
                "  {} ({} node types)",
                dialect.name,
                dialect.definition.len()
            );
        } else {
            println!(
                "  {} ({} node types, aliases: {})",
                dialect.name,
                dialect.definition.len(),
                aliases.join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use astgraft_lib::schema::Schema;

    use crate::commands::definition_loader::load_stack;

    fn smoke_resolve(stack: &[&str]) -> Schema {
        let (base, layers) = stack.split_first().unwrap();
        let layers: Vec<String> = layers.iter().map(|s| s.to_string()).collect();
        let definition = load_stack(Some(base), None, &layers).unwrap();
        let schema = Schema::resolve(definition);
        assert!(
            schema.is_valid(),
            "stack {:?} should resolve cleanly:\n{}",
            stack,
            schema.diagnostics().render()
        );
        schema
    }

    #[test]
    fn smoke_resolve_core() {
        let schema = smoke_resolve(&["core"]);
        assert!(schema.get("Program").is_some());
    }

    #[test]
    #[cfg(feature = "dialect-es2017")]
    fn smoke_resolve_es2017() {
        let schema = smoke_resolve(&["core", "es2017"]);
        assert!(schema.get("AwaitExpression").is_some());
    }

    #[test]
    #[cfg(feature = "dialect-jsx")]
    fn smoke_resolve_jsx() {
        let schema = smoke_resolve(&["core", "jsx"]);
        assert!(schema.get("JSXElement").is_some());
    }

    #[test]
    #[cfg(feature = "dialect-typescript")]
    fn smoke_resolve_typescript() {
        let schema = smoke_resolve(&["core", "typescript"]);
        assert!(schema.get("TSInterfaceDeclaration").is_some());
    }

    #[test]
    #[cfg(all(
        feature = "dialect-es2017",
        feature = "dialect-jsx",
        feature = "dialect-typescript"
    ))]
    fn smoke_resolve_full_stack() {
        smoke_resolve(&["core", "es2017", "jsx", "typescript"]);
    }

    #[test]
    fn dialect_aliases_reach_the_same_definition() {
        assert!(load_stack(Some("ES5"), None, &[]).is_ok());
        assert!(load_stack(Some("estree"), None, &[]).is_ok());
    }
}
