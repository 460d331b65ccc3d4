//! Build script for flatmask-cli.
//!
//! Generates the `flatmask.1` man page into `OUT_DIR` using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Input arguments shared by `reduce` and `normalize`.
fn input_args() -> Vec<Arg> {
    vec![
        Arg::new("paths")
            .value_name("PATH")
            .help("Paths to include in the mask")
            .num_args(0..),
        Arg::new("mask")
            .long("mask")
            .value_name("MASK")
            .help("Comma-separated mask, e.g. \"a.b,c.d\" (repeatable)")
            .action(ArgAction::Append),
        Arg::new("input")
            .long("input")
            .short('i')
            .value_name("FILE")
            .help("Read a mask document (JSON, YAML, or one path per line); \"-\" for stdin"),
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .help("Output format")
            .value_parser(["text", "json", "yaml", "mask"]),
    ]
}

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("flatmask")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reduce field masks to a bounded path depth")
        .long_about(
            "Truncate dot-delimited field paths to a fixed number of leading segments \
             and remove the duplicates this creates",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml (default: ~/.flatmask)")
                .value_name("PATH")
                .global(true)
                .env("FLATMASK_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("reduce")
                .about("Truncate paths to a degree and remove duplicates")
                .args(input_args())
                .arg(
                    Arg::new("degree")
                        .long("degree")
                        .short('d')
                        .value_name("DEGREE")
                        .help("Segments to keep: a number, \"total\" (1), or \"root-child\" (2)"),
                ),
            Command::new("normalize")
                .about("Sort, deduplicate, and drop covered paths")
                .args(input_args()),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
            Command::new("show-config")
                .about("Print the effective configuration")
                .arg(
                    Arg::new("no-defaults")
                        .long("no-defaults")
                        .help("Show only values set by a source, without built-in defaults")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("flatmask.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
