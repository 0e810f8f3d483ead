#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use cmdtree::{cli, run_with_config, setup_logging};

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Setup logging based on debug flag
    setup_logging(cli::debug_requested(&argv))?;

    let root = cli::build_command_tree();
    let config = cli::config();

    // Resolve and execute the requested command
    run_with_config(&root, &argv, &config, &mut std::io::stdout().lock())?;
    Ok(())
}
