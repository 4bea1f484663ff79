//! Post-install patcher for `@libp2p/http-utils`.
//!
//! Intended to run as a best-effort step after `npm install`: a missing
//! dependency or an upstream fix is reported and skipped, only real I/O
//! failures fail the invoking pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use portfix::core::rule::PatchRule;
use portfix::io::patch_file::apply_to_file;
use portfix::io::rule_file::{builtin_rules, load_rules};
use portfix::io::target::default_target;
use portfix::{exit_codes, logging, report};

#[derive(Parser)]
#[command(
    name = "portfix",
    version,
    about = "Patch @libp2p/http-utils to default empty URL ports"
)]
struct Cli {
    /// Project root containing node_modules.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Patch this file instead of the default target under --root.
    #[arg(long)]
    target: Option<PathBuf>,

    /// TOML rule file replacing the built-in rule set.
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::IO_ERROR
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let rules: Vec<PatchRule> = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => builtin_rules(),
    };
    let target = cli
        .target
        .clone()
        .unwrap_or_else(|| default_target(&cli.root));

    let mut code = exit_codes::OK;
    for rule in &rules {
        let outcome = apply_to_file(&target, rule);
        println!("{}", report::status_line(&outcome, rule, &target));
        code = code.max(report::exit_code(&outcome));
    }
    Ok(code)
}
