// SPDX-License-Identifier: AGPL-3.0-only

#![cfg_attr(feature = "cargo-clippy", warn(clippy_pedantic))]
#![cfg_attr(feature = "cargo-clippy", allow(use_self))]

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate serde_json;
extern crate zonescan;

use clap::{App, Arg};
use env_logger::Builder;
use failure::ResultExt;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::str::FromStr;
use zonescan::Scanner;

fn main() -> Result<(), failure::Error> {
    let matches = App::new("zonescan")
        .arg(
            Arg::with_name("origin")
                .short("o")
                .long("origin")
                .value_name("ORIGIN")
                .help("Initial origin for relative names (must end in '.')")
                .takes_value(true),
        ).arg(
            Arg::with_name("ttl")
                .short("t")
                .long("ttl")
                .value_name("TTL")
                .help("Initial default TTL for records without one")
                .takes_value(true),
        ).arg(
            Arg::with_name("json")
                .long("json")
                .help("Print records as JSON lines"),
        ).arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets verbosity level (max: -vvv)"),
        ).arg(
            Arg::with_name("ZONEFILE")
                .help("Zone file to read, or - for stdin")
                .required(true),
        ).get_matches();

    // Set log level from -v option
    {
        let level = matches.occurrences_of("verbose");
        let mut builder = Builder::new();
        if level >= 3 {
            builder.filter_level(LevelFilter::Trace)
        } else {
            let level = match level {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            builder.filter_module("zonescan", level)
        };
        builder.init();
    }

    let path = matches.value_of("ZONEFILE").unwrap_or("-");
    let input: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(path).with_context(|e| format!("Failed to open {}: {}", path, e))?)
    };

    let mut scanner = Scanner::new(input);
    if let Some(origin) = matches.value_of("origin") {
        scanner.set_origin(origin)?;
    }
    if let Some(ttl) = matches.value_of("ttl") {
        scanner.set_default_ttl(
            i64::from_str(ttl).context(format!("Could not parse TTL: {}", ttl))?,
        )?;
    }

    let json = matches.is_present("json");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0;
    loop {
        let record = match scanner.next_record() {
            Ok(Some(record)) => record,
            Ok(None) => break,
            Err(err) => bail!("{}:{}: {}", path, scanner.line(), err),
        };
        if json {
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", record)?;
        }
        count += 1;
    }
    out.flush()?;

    info!("read {} records from {}", count, path);
    Ok(())
}
