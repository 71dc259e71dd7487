//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: data commands accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, node_command, types_command};
use crate::commands::types::TypesArgs;
use astgraft_lib::typegen::typescript::AbsentParent;

#[test]
fn build_cli_lists_all_subcommands() {
    let cmd = build_cli();
    let names: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["check", "types", "node", "dump", "dialects"]);
}

#[test]
fn check_accepts_types_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "ast.json",
        "--no-export",
        "--exact-keys",
        "-o",
        "ast.d.ts",
    ]);
    assert!(
        result.is_ok(),
        "check should accept types flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
    // no_export, exact_keys and output are parsed but not in CheckParams
    // (that's the point)
}

#[test]
fn check_accepts_node_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "ast.json",
        "-w",
        "kind=init",
        "--json",
        "--compact",
    ]);
    assert!(
        result.is_ok(),
        "check should accept node flags: {:?}",
        result.err()
    );
}

#[test]
fn types_accepts_node_flags() {
    let cmd = types_command();
    let result = cmd.try_get_matches_from(["types", "ast.json", "-w", "kind=init", "--json"]);
    assert!(
        result.is_ok(),
        "types should accept node flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = TypesParams::from_matches(&m);
    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
}

#[test]
fn types_accepts_strict_flag() {
    let cmd = types_command();
    let result = cmd.try_get_matches_from(["types", "ast.json", "--strict"]);
    assert!(
        result.is_ok(),
        "types should accept --strict: {:?}",
        result.err()
    );
}

#[test]
fn node_accepts_types_flags() {
    let cmd = node_command();
    let result = cmd.try_get_matches_from([
        "node",
        "Identifier",
        "-d",
        "core",
        "--no-support-types",
        "--parent-undefined",
    ]);
    assert!(
        result.is_ok(),
        "node should accept types flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = NodeParams::from_matches(&m);
    assert_eq!(params.name, "Identifier");
    assert_eq!(params.dialect, Some("core".to_string()));
}

#[test]
fn dump_accepts_filter_and_emit_flags() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from([
        "dump",
        "ast.json",
        "--json",
        "-w",
        "kind=init",
        "--no-export",
        "-o",
        "ast.d.ts",
    ]);
    assert!(
        result.is_ok(),
        "dump should accept filter and emit flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
    // json, where, no_export and output are parsed but not in DumpParams
}

#[test]
fn check_help_hides_unified_flags() {
    let mut cmd = check_command();
    let help = cmd.render_help().to_string();

    // Emit flags should be hidden
    assert!(
        !help.contains("--no-export"),
        "check help should not show --no-export"
    );
    assert!(
        !help.contains("--output"),
        "check help should not show --output"
    );
    assert!(
        !help.contains("--parent-undefined"),
        "check help should not show --parent-undefined"
    );

    // Node flags should be hidden
    assert!(
        !help.contains("--where"),
        "check help should not show --where"
    );
    assert!(!help.contains("--json"), "check help should not show --json");
    assert!(
        !help.contains("--compact"),
        "check help should not show --compact"
    );

    // Own flags stay visible
    assert!(help.contains("--strict"), "check help SHOULD show --strict");
    assert!(
        help.contains("--lenient"),
        "check help SHOULD show --lenient"
    );
}

#[test]
fn types_help_hides_unified_flags() {
    let mut cmd = types_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--strict"),
        "types help should not show --strict"
    );
    assert!(
        !help.contains("--where"),
        "types help should not show --where"
    );
    assert!(!help.contains("--json"), "types help should not show --json");
    assert!(
        !help.contains("--compact"),
        "types help should not show --compact"
    );

    // Emit flags stay visible
    assert!(
        help.contains("--no-export"),
        "types help SHOULD show --no-export"
    );
    assert!(
        help.contains("--exact-keys"),
        "types help SHOULD show --exact-keys"
    );
    assert!(help.contains("--output"), "types help SHOULD show --output");
}

#[test]
fn node_help_hides_emit_flags() {
    let mut cmd = node_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--no-export"),
        "node help should not show --no-export"
    );
    assert!(
        !help.contains("--no-support-types"),
        "node help should not show --no-support-types"
    );
    assert!(
        !help.contains("--strict"),
        "node help should not show --strict"
    );

    assert!(help.contains("--where"), "node help SHOULD show --where");
    assert!(help.contains("--json"), "node help SHOULD show --json");
}

#[test]
fn dump_help_hides_unified_flags() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--json"), "dump help should not show --json");
    assert!(
        !help.contains("--where"),
        "dump help should not show --where"
    );
    assert!(
        !help.contains("--no-export"),
        "dump help should not show --no-export"
    );

    assert!(help.contains("--compact"), "dump help SHOULD show --compact");
}

#[test]
fn check_params_extracts_all_fields() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "ast.json",
        "-e",
        "jsx",
        "-e",
        "extra.json",
        "--strict",
        "--lenient",
        "--color",
        "always",
    ]);
    assert!(result.is_ok());

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
    assert_eq!(params.dialect, None);
    assert_eq!(params.extend, ["jsx".to_string(), "extra.json".to_string()]);
    assert!(params.strict);
    assert!(params.lenient);
    assert!(matches!(params.color, ColorChoice::Always));
}

#[test]
fn types_params_extracts_all_fields() {
    let cmd = types_command();
    let result = cmd.try_get_matches_from([
        "types",
        "-d",
        "core",
        "-e",
        "typescript",
        "-o",
        "ast.d.ts",
        "--no-export",
        "--no-support-types",
        "--exact-keys",
        "--parent-undefined",
        "--color",
        "never",
    ]);
    assert!(result.is_ok());

    let m = result.unwrap();
    let params = TypesParams::from_matches(&m);

    assert_eq!(params.definition, None);
    assert_eq!(params.dialect, Some("core".to_string()));
    assert_eq!(params.extend, ["typescript".to_string()]);
    assert_eq!(params.output, Some(PathBuf::from("ast.d.ts")));
    assert!(params.no_export);
    assert!(params.no_support_types);
    assert!(params.exact_keys);
    assert!(params.parent_undefined);
    assert!(matches!(params.color, ColorChoice::Never));
}

#[test]
fn types_args_invert_emit_flags() {
    let cmd = types_command();
    let m = cmd
        .try_get_matches_from(["types", "ast.json", "--no-export", "--exact-keys"])
        .unwrap();

    let args: TypesArgs = TypesParams::from_matches(&m).into();

    assert!(!args.config.export);
    assert!(args.config.support_types);
    assert!(!args.config.permissive_keys);
    assert!(matches!(args.config.absent_parent, AbsentParent::Null));
}

#[test]
fn parent_undefined_switches_absent_parent() {
    let cmd = types_command();
    let m = cmd
        .try_get_matches_from(["types", "ast.json", "--parent-undefined"])
        .unwrap();

    let args: TypesArgs = TypesParams::from_matches(&m).into();
    assert!(matches!(args.config.absent_parent, AbsentParent::Undefined));
}

#[test]
fn node_takes_name_then_definition() {
    let cmd = node_command();
    let m = cmd
        .try_get_matches_from(["node", "Identifier", "ast.json"])
        .unwrap();

    let params = NodeParams::from_matches(&m);
    assert_eq!(params.name, "Identifier");
    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
}

#[test]
fn node_requires_a_name() {
    let cmd = node_command();
    assert!(cmd.try_get_matches_from(["node"]).is_err());
}

#[test]
fn node_collects_repeated_filters() {
    let cmd = node_command();
    let m = cmd
        .try_get_matches_from([
            "node",
            "Property",
            "-d",
            "core",
            "-w",
            "kind=init",
            "-w",
            "computed=false",
        ])
        .unwrap();

    let params = NodeParams::from_matches(&m);
    assert_eq!(
        params.filters,
        ["kind=init".to_string(), "computed=false".to_string()]
    );
}

#[test]
fn color_defaults_to_auto() {
    let cmd = check_command();
    let m = cmd.try_get_matches_from(["check", "ast.json"]).unwrap();
    assert!(matches!(
        CheckParams::from_matches(&m).color,
        ColorChoice::Auto
    ));
}

#[test]
fn dump_params_extracts_only_relevant_fields() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from([
        "dump",
        "ast.json",
        "--compact",
        "--lenient",
        "--color",
        "auto",
        // Accepted but ignored
        "--json",
        "--no-export",
    ]);
    assert!(result.is_ok());

    let m = result.unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.definition, Some(PathBuf::from("ast.json")));
    assert!(params.compact);
    assert!(params.lenient);
    assert!(matches!(params.color, ColorChoice::Auto));
}
