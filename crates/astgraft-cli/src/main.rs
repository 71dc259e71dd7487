mod cli;
mod commands;

use cli::{CheckParams, DialectsParams, DumpParams, NodeParams, TypesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("node", m)) => {
            let params = NodeParams::from_matches(m);
            commands::node::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("dialects", m)) => {
            let _params = DialectsParams::from_matches(m);
            commands::dialects::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
