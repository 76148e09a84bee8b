use std::{env, process};

use movie_catalog::{Options, USAGE};

mod logging;

fn get_options() -> Options {
    match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }
}

fn main() {
    logging::setup_logging();

    movie_catalog::run(get_options());
}
