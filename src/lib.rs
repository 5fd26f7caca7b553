//! imagekeep - Interactive Image Inventory Manager
//!
//! Catalogs the image files of a single directory and lets an operator
//! inspect the catalog, order it by file size with an explicit min-heap,
//! detect content-identical duplicates (BLAKE3), and delete duplicate
//! copies interactively.

pub mod actions;
pub mod catalog;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod menu;
pub mod session;
pub mod signal;

use error::ExitCode;

/// Run the application: logging, signals, optional preload, menu loop.
///
/// # Errors
///
/// Returns an error when the signal handler cannot be installed, when the
/// CLI-supplied startup directory fails to load, or on an unexpected
/// terminal I/O failure. An interrupt is not an error; it is reported as
/// [`ExitCode::Interrupted`].
pub fn run_app(cli: cli::Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let shutdown = signal::install_handler()?;

    let mut session = session::Session::new();
    if let Some(directory) = &cli.directory {
        let count = session.load_directory(directory)?;
        println!("{} image(s) loaded from {}", count, directory.display());
    }

    menu::run(&mut session, &shutdown)
}
