//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use astgraft_lib::typegen::typescript::{AbsentParent, Config};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::node::NodeArgs;
use crate::commands::types::TypesArgs;

pub struct CheckParams {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub strict: bool,
    pub lenient: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition: m.get_one::<PathBuf>("definition").cloned(),
            dialect: m.get_one::<String>("dialect").cloned(),
            extend: collect_strings(m, "extend"),
            strict: m.get_flag("strict"),
            lenient: m.get_flag("lenient"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            definition: p.definition,
            dialect: p.dialect,
            extend: p.extend,
            strict: p.strict,
            lenient: p.lenient,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TypesParams {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub lenient: bool,
    pub output: Option<PathBuf>,
    pub no_export: bool,
    pub no_support_types: bool,
    pub exact_keys: bool,
    pub parent_undefined: bool,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition: m.get_one::<PathBuf>("definition").cloned(),
            dialect: m.get_one::<String>("dialect").cloned(),
            extend: collect_strings(m, "extend"),
            lenient: m.get_flag("lenient"),
            output: m.get_one::<PathBuf>("output").cloned(),
            no_export: m.get_flag("no_export"),
            no_support_types: m.get_flag("no_support_types"),
            exact_keys: m.get_flag("exact_keys"),
            parent_undefined: m.get_flag("parent_undefined"),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        // CLI flags are negative ("--no-export"); the emitter config is
        // positive, so each one inverts.
        let config = Config {
            export: !p.no_export,
            support_types: !p.no_support_types,
            permissive_keys: !p.exact_keys,
            absent_parent: if p.parent_undefined {
                AbsentParent::Undefined
            } else {
                AbsentParent::Null
            },
        };
        Self {
            definition: p.definition,
            dialect: p.dialect,
            extend: p.extend,
            lenient: p.lenient,
            output: p.output,
            config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct NodeParams {
    pub name: String,
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub filters: Vec<String>,
    pub json: bool,
    pub compact: bool,
    pub lenient: bool,
    pub color: ColorChoice,
}

impl NodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            definition: m.get_one::<PathBuf>("definition").cloned(),
            dialect: m.get_one::<String>("dialect").cloned(),
            extend: collect_strings(m, "extend"),
            filters: collect_strings(m, "where"),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            lenient: m.get_flag("lenient"),
            color: parse_color(m),
        }
    }
}

impl From<NodeParams> for NodeArgs {
    fn from(p: NodeParams) -> Self {
        // Pretty-print JSON when stdout is a TTY, unless --compact.
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());
        Self {
            name: p.name,
            definition: p.definition,
            dialect: p.dialect,
            extend: p.extend,
            filters: p.filters,
            json: p.json,
            pretty,
            lenient: p.lenient,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub definition: Option<PathBuf>,
    pub dialect: Option<String>,
    pub extend: Vec<String>,
    pub compact: bool,
    pub lenient: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition: m.get_one::<PathBuf>("definition").cloned(),
            dialect: m.get_one::<String>("dialect").cloned(),
            extend: collect_strings(m, "extend"),
            compact: m.get_flag("compact"),
            lenient: m.get_flag("lenient"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());
        Self {
            definition: p.definition,
            dialect: p.dialect,
            extend: p.extend,
            pretty,
            lenient: p.lenient,
            color: p.color.should_colorize(),
        }
    }
}

/// `dialects` takes no arguments; the params type exists for uniform dispatch.
pub struct DialectsParams {}

impl DialectsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self {}
    }
}

fn collect_strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
