use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ProbeArgs;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    // Static glossary only; exits before logging or network setup.
    if args.help_tags {
        crate::app::print_tag_help();
        return Ok(());
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(crate::app::run_probe(args))
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let cmd = ProbeArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    // get_matches_from follows clap's convention and exits non-zero on
    // a parse failure. ArgMatches is kept so config values never
    // override flags given on the command line.
    let matches = cmd.get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;

    Ok((args, matches))
}
