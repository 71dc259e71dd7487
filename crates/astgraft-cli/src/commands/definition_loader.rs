//! Shared loading of definition stacks.
//!
//! Every data command takes its input the same way: a base definition
//! (a file, `-` for stdin, or a built-in dialect via `-d`) plus any number
//! of `-e` enhancement layers, merged left to right.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use astgraft_core::Definition;

/// Load the base definition and merge enhancement layers onto it.
///
/// Layer names are tried as built-in dialects first, then as file paths.
pub fn load_stack(
    dialect: Option<&str>,
    definition: Option<&Path>,
    extend: &[String],
) -> Result<Definition, String> {
    let base = load_base(dialect, definition)?;
    let layers = extend
        .iter()
        .map(|layer| load_layer(layer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(base.extend(layers))
}

fn load_base(dialect: Option<&str>, definition: Option<&Path>) -> Result<Definition, String> {
    match (dialect, definition) {
        (Some(_), Some(_)) => Err("pass a definition file or -d/--dialect, not both".to_string()),
        (Some(name), None) => builtin(name),
        (None, Some(path)) => load_file(path),
        (None, None) => {
            Err("no definition given: pass a file, '-' for stdin, or -d/--dialect".to_string())
        }
    }
}

fn builtin(name: &str) -> Result<Definition, String> {
    astgraft_dialects::from_name(name).cloned().ok_or_else(|| {
        format!("unknown dialect '{name}'; run 'astgraft dialects' for the full list")
    })
}

fn load_layer(layer: &str) -> Result<Definition, String> {
    if let Some(definition) = astgraft_dialects::from_name(layer) {
        return Ok(definition.clone());
    }
    load_file(Path::new(layer))
}

fn load_file(path: &Path) -> Result<Definition, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Definition::from_json(&buf).map_err(|e| format!("<stdin>: {}", e));
    }
    let json = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Definition::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
}
