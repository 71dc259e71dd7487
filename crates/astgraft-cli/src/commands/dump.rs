use std::path::PathBuf;

use astgraft_lib::schema::{Schema, SchemaOptions, Strictness};

use super::definition_loader::load_stack;

pub struct DumpArgs {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub pretty: bool,
    pub lenient: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let definition = match load_stack(
        args.dialect.as_deref(),
        args.definition.as_deref(),
        &args.extend,
    ) {
        Ok(definition) => definition,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let options = SchemaOptions {
        strictness: if args.lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        },
    };
    let schema = Schema::resolve_with(definition, options);

    if !schema.is_valid() {
        eprint!(
            "{}",
            schema.diagnostics().render_filtered_colored(args.color)
        );
        std::process::exit(1);
    }

    let value = schema.to_json();
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    // Lenient-mode warnings go to stderr, after the output
    let diagnostics = schema.diagnostics();
    if diagnostics.has_warnings() {
        eprint!("{}", diagnostics.render_filtered_colored(args.color));
    }
}
