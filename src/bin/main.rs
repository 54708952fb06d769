extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate fuzzysearch;
extern crate shlex;

use std::env;
use std::io::{BufWriter, IsTerminal};

use clap::Parser;
use color_eyre::eyre::Result;
use fuzzysearch::{FilterOptions, MatchError};

const DEFAULT_OPTIONS_VAR: &str = "FUZZY_DEFAULT_OPTIONS";

//------------------------------------------------------------------------------
fn main() -> Result<()> {
    env_logger::builder().format_timestamp_nanos().init();
    color_eyre::install()?;

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err.is_broken_pipe() {
                std::process::exit(0)
            }
            eprintln!("{:?}", color_eyre::Report::new(err));
            std::process::exit(2)
        }
    }
}

fn parse_args() -> FilterOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("fz")));
    args.extend(
        env::var(DEFAULT_OPTIONS_VAR)
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    FilterOptions::parse_from(args)
}

fn real_main() -> Result<i32, MatchError> {
    let opts = parse_args();
    debug!("options: {:?}", opts);

    let stdin = std::io::stdin();
    if opts.haystacks.is_empty() && stdin.is_terminal() {
        warn!("reading candidates from a terminal, end input with Ctrl-D");
    }

    let stdout = BufWriter::new(std::io::stdout().lock());
    let num_matched = fuzzysearch::filter(&opts, stdin.lock(), stdout)?;

    Ok(if num_matched == 0 { 1 } else { 0 })
}
