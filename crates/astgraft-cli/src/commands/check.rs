use std::path::PathBuf;

use astgraft_lib::schema::{Schema, SchemaOptions, Strictness};

use super::definition_loader::load_stack;

pub struct CheckArgs {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub strict: bool,
    pub lenient: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
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

    let diagnostics = schema.diagnostics();
    let valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        schema.is_valid()
    };

    if !valid {
        eprint!("{}", diagnostics.render_filtered_colored(args.color));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
