use std::fs;
use std::path::PathBuf;

use astgraft_lib::schema::{Schema, SchemaOptions, Strictness};
use astgraft_lib::typegen::typescript::{Config, emit_with_config};

use super::definition_loader::load_stack;

pub struct TypesArgs {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub lenient: bool,
    pub output: Option<PathBuf>,
    pub config: Config,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
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

    let declarations = emit_with_config(&schema, &args.config);

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &declarations) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", declarations),
    }

    // Lenient-mode warnings go to stderr, after the output
    let diagnostics = schema.diagnostics();
    if diagnostics.has_warnings() {
        eprint!("{}", diagnostics.render_filtered_colored(args.color));
    }
}
