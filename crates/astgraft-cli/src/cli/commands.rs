//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.
//! The unified flags feature is implemented here: every data command
//! accepts the others' flags, with irrelevant ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden typegen flags (for commands that don't generate types).
fn with_hidden_emit_args(cmd: Command) -> Command {
    cmd.arg(output_arg().hide(true))
        .arg(no_export_arg().hide(true))
        .arg(no_support_types_arg().hide(true))
        .arg(exact_keys_arg().hide(true))
        .arg(parent_undefined_arg().hide(true))
}

/// Add hidden node-selection flags (for commands that don't select nodes).
fn with_hidden_filter_args(cmd: Command) -> Command {
    cmd.arg(where_arg().hide(true)).arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("astgraft")
        .about("AST definition compiler and TypeScript type generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(types_command())
        .subcommand(node_command())
        .subcommand(dump_command())
        .subcommand(dialects_command())
}

/// Validate a definition stack.
///
/// Accepts all unified flags, but only uses definition input, strictness
/// and color.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an AST definition")
        .override_usage(
            "\
  astgraft check <DEFINITION> [-e <LAYER>]...
  astgraft check -d <NAME> [-e <LAYER>]...",
        )
        .after_help(
            r#"EXAMPLES:
  astgraft check ast.json                 # one definition file
  astgraft check -d core -e typescript    # built-in dialect stack
  astgraft check ast.json -e jsx.json     # definition plus a layer file
  cat ast.json | astgraft check -         # read stdin
  astgraft check ast.json --strict        # warnings fail too"#,
        )
        .arg(definition_arg())
        .arg(dialect_arg())
        .arg(extend_arg())
        .arg(strict_arg())
        .arg(lenient_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_filter_args(with_hidden_emit_args(cmd)).arg(compact_arg().hide(true))
}

/// Generate TypeScript declarations.
pub fn types_command() -> Command {
    let cmd = Command::new("types")
        .about("Generate TypeScript declarations from a definition")
        .override_usage(
            "\
  astgraft types <DEFINITION> [-o <FILE>]
  astgraft types -d <NAME> [-e <LAYER>]... [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  astgraft types -d core -o ast.d.ts      # built-in dialect to a file
  astgraft types -d core -e typescript    # dialect stack to stdout
  astgraft types ast.json --no-export     # plain declarations
  astgraft types ast.json --exact-keys    # no [key: string] signature"#,
        )
        .arg(definition_arg())
        .arg(dialect_arg())
        .arg(extend_arg())
        .arg(output_arg())
        .arg(no_export_arg())
        .arg(no_support_types_arg())
        .arg(exact_keys_arg())
        .arg(parent_undefined_arg())
        .arg(lenient_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_filter_args(cmd)
        .arg(strict_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Inspect resolved node types by name.
pub fn node_command() -> Command {
    let cmd = Command::new("node")
        .about("Show resolved node types")
        .override_usage(
            "\
  astgraft node <NAME> <DEFINITION>
  astgraft node <NAME> -d <DIALECT> [-w <KEY=VALUE>]...",
        )
        .after_help(
            r#"EXAMPLES:
  astgraft node Identifier -d core             # one node type
  astgraft node Statement -d core              # every statement type
  astgraft node Property -d core -w kind=init  # narrow by shape
  astgraft node Node ast.json --json           # machine-readable"#,
        )
        .arg(name_arg())
        .arg(definition_arg())
        .arg(dialect_arg())
        .arg(extend_arg())
        .arg(where_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(lenient_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_emit_args(cmd).arg(strict_arg().hide(true))
}

/// Dump the resolved schema.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Dump the resolved schema as JSON")
        .override_usage(
            "\
  astgraft dump <DEFINITION>
  astgraft dump -d <NAME> [-e <LAYER>]...",
        )
        .after_help(
            r#"EXAMPLES:
  astgraft dump -d core                        # resolved schema as JSON
  astgraft dump ast.json --compact             # single line for piping
  astgraft dump -d core -e jsx | jq '.nodes'   # inspect with jq"#,
        )
        .arg(definition_arg())
        .arg(dialect_arg())
        .arg(extend_arg())
        .arg(compact_arg())
        .arg(lenient_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_filter_args(with_hidden_emit_args(cmd)).arg(strict_arg().hide(true))
}

/// List built-in dialects.
pub fn dialects_command() -> Command {
    Command::new("dialects").about("List built-in dialects with aliases")
}
