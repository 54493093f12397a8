//! Headless scoreboard: commands on stdin, JSON snapshots on stdout.
//!
//! Logs go to stderr (filter from `KILLER_LOG`).

use std::io::{self, BufWriter};

use anyhow::Result;

use killer_darts::core::Session;
use killer_darts::script::{parse_script_args, run_script, USAGE};
use killer_darts::{logging, AppConfig};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(script_cfg) = parse_script_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let cfg = AppConfig::from_env();
    logging::init_stderr(&cfg.log_filter)?;

    let mut session = Session::with_threshold(script_cfg.threshold);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_script(&mut session, stdin.lock(), BufWriter::new(stdout.lock()))
}
