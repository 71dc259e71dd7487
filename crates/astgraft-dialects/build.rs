use std::path::PathBuf;

use astgraft_core::Definition;

const DIALECTS: &[&str] = &["core", "es2017", "jsx", "typescript"];

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    let assets = PathBuf::from(&manifest_dir).join("assets");

    for name in DIALECTS {
        if !dialect_enabled(name) {
            continue;
        }

        let source = assets.join(format!("{name}.json"));
        let json = std::fs::read_to_string(&source)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", source.display()));
        let definition = Definition::from_json(&json)
            .unwrap_or_else(|err| panic!("invalid dialect definition {name}: {err}"));

        let target = out_dir.join(format!("{name}.bin"));
        std::fs::write(&target, definition.to_binary())
            .unwrap_or_else(|err| panic!("failed to write {}: {err}", target.display()));

        println!("cargo::rerun-if-changed={}", source.display());
    }

    for (key, _) in std::env::vars() {
        if key.starts_with("CARGO_FEATURE_DIALECT_") {
            println!("cargo::rerun-if-env-changed={key}");
        }
    }

    println!("cargo::rerun-if-changed=build.rs");
}

fn dialect_enabled(name: &str) -> bool {
    // The base definition is not feature-gated
    if name == "core" {
        return true;
    }
    let key = format!(
        "CARGO_FEATURE_DIALECT_{}",
        name.to_uppercase().replace('-', "_")
    );
    std::env::var_os(key).is_some()
}
