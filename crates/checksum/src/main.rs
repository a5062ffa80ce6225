use std::io;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

use cli::App;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    let stdout = io::stdout();
    match cli::run(&app, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
