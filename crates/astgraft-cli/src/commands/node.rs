use std::path::PathBuf;

use astgraft_core::Colors;
use astgraft_lib::schema::{FilterValue, NodeFilter, Schema, SchemaOptions, Strictness};

use super::definition_loader::load_stack;

pub struct NodeArgs {
    pub name: String,
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub filters: Vec<String>,
    pub json: bool,
    pub pretty: bool,
    pub lenient: bool,
    pub color: bool,
}

pub fn run(args: NodeArgs) {
    let filter = match parse_filters(&args.filters) {
        Ok(filter) => filter,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

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

    let nodes = match schema.extract(&args.name, &filter) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let value = schema.nodes_to_json(&nodes);
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
    } else {
        print!("{}", schema.render_nodes(&nodes, Colors::new(args.color)));
    }

    // Lenient-mode warnings go to stderr, after the output
    let diagnostics = schema.diagnostics();
    if diagnostics.has_warnings() {
        eprint!("{}", diagnostics.render_filtered_colored(args.color));
    }
}

/// Parse repeated `KEY=VALUE` arguments into one filter.
fn parse_filters(raw: &[String]) -> Result<NodeFilter, String> {
    let mut filter = NodeFilter::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(format!("invalid filter '{}', expected KEY=VALUE", entry));
        };
        if key.is_empty() {
            return Err(format!("invalid filter '{}', expected KEY=VALUE", entry));
        }
        filter = filter.with(key, FilterValue::parse(value));
    }
    Ok(filter)
}
