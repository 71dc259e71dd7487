//! Shared argument builders, one per flag, reused across subcommands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Definition file path (positional).
pub fn definition_arg() -> Arg {
    Arg::new("definition")
        .value_name("DEFINITION")
        .value_parser(value_parser!(PathBuf))
        .help("AST definition file (JSON), or '-' for stdin")
}

/// Built-in base dialect (-d/--dialect).
pub fn dialect_arg() -> Arg {
    Arg::new("dialect")
        .short('d')
        .long("dialect")
        .value_name("NAME")
        .help("Start from a built-in dialect instead of a file")
}

/// Enhancement layers (-e/--extend, repeatable).
pub fn extend_arg() -> Arg {
    Arg::new("extend")
        .short('e')
        .long("extend")
        .value_name("LAYER")
        .action(ArgAction::Append)
        .help("Merge an enhancement layer: a built-in dialect name or a file")
}

/// Node type name (positional, required).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .help("Node type, or a meta type (Node, Statement, Expression)")
}

/// Property filter (-w/--where, repeatable).
pub fn where_arg() -> Arg {
    Arg::new("where")
        .short('w')
        .long("where")
        .value_name("KEY=VALUE")
        .action(ArgAction::Append)
        .help("Keep only node types whose shape admits KEY=VALUE")
}

/// Output JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of text")
}

/// Tolerate unknown reference targets (--lenient).
pub fn lenient_arg() -> Arg {
    Arg::new("lenient")
        .long("lenient")
        .action(ArgAction::SetTrue)
        .help("Downgrade unknown reference targets from errors to warnings")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .value_parser(["auto", "always", "never"])
        .default_value("auto")
        .help("Color output control")
}

/// Write output to file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Don't export generated types (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export generated types")
}

/// Don't emit support types (--no-support-types).
pub fn no_support_types_arg() -> Arg {
    Arg::new("no_support_types")
        .long("no-support-types")
        .action(ArgAction::SetTrue)
        .help("Don't emit Position/SourceLocation/Range definitions")
}

/// Omit the permissive index signature (--exact-keys).
pub fn exact_keys_arg() -> Arg {
    Arg::new("exact_keys")
        .long("exact-keys")
        .action(ArgAction::SetTrue)
        .help("Omit the permissive [key: string] index signature")
}

/// Type absent parents as undefined (--parent-undefined).
pub fn parent_undefined_arg() -> Arg {
    Arg::new("parent_undefined")
        .long("parent-undefined")
        .action(ArgAction::SetTrue)
        .help("Type absent parents as undefined instead of null")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}
