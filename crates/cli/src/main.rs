//! Tego CLI application entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;

fn main() {
    // TEGO_SKIP bypasses everything, including argument parsing
    if tego::skip_requested() {
        std::process::exit(0);
    }

    // Configure miette for error reporting
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    // Parse CLI arguments
    let cli = tego::Cli::parse();

    // Run and display errors with miette formatting
    if let Err(e) = tego::run(cli) {
        let report = tego::error::to_report(&e);
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
