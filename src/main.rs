use std::process::exit;

use log::error;

use template_scaffold::cli::{get_log_file, get_matches, get_verbosity};
use template_scaffold::prelude::*;

fn main() {
    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("error: {e}");
            exit(1);
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("error: Failed to initialise logger: {e}");
        exit(1);
    }

    match run_command(&matches) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            error!("{e:#}");
            exit(1);
        }
    }
}
