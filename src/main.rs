//! folio - the portfolio site, in a terminal.
//!
//! Run with: `folio-tui [--theme <name>] [--no-animations]`

use std::io;

use clap::Parser;

use folio_tui::state::reveal;
use folio_tui::{app, theme};

#[derive(Parser, Debug)]
#[command(name = "folio-tui", version, about = "Scroll-driven terminal portfolio site")]
struct Args {
    /// Color theme to start with.
    #[arg(long, env = "FOLIO_THEME", default_value = "terminal")]
    theme: String,

    /// Skip entrance animations; every block renders revealed.
    #[arg(long, env = "FOLIO_NO_ANIMATIONS")]
    no_animations: bool,

    /// List available themes and exit.
    #[arg(long)]
    list_themes: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.list_themes {
        for name in theme::preset_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if !theme::set_theme(&args.theme) {
        eprintln!(
            "unknown theme '{}' (try one of: {})",
            args.theme,
            theme::preset_names().join(", ")
        );
        std::process::exit(2);
    }

    if args.no_animations {
        reveal::fail_open();
    }

    let handle = app::mount()?;
    let result = app::run(&handle);
    handle.unmount()?;
    result
}
