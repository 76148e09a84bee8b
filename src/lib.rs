pub mod adapter;
pub mod model;
pub mod render;
pub mod repository;
pub mod screen;

use std::path::PathBuf;

use repository::movie_repository::MovieRepository;
use screen::MovieScreen;

pub const USAGE: &str = "Usage: movie_catalog [CATALOG.json]";

#[derive(Debug, Default, PartialEq)]
pub struct Options {
    pub catalog: Option<PathBuf>,
}

impl Options {
    /// Reads the options from the command-line arguments, program name excluded.
    ///
    /// The only argument is an optional catalog path. Anything that looks like a
    /// flag, or a second path, is an error instead of being read as a catalog.
    pub fn from_args<I>(args: I) -> Result<Options, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();

        for arg in args {
            if arg.starts_with('-') {
                return Err(format!("Unknown option {}", arg));
            }
            if let Some(catalog) = &options.catalog {
                return Err(format!(
                    "Expected a single catalog path, got {} and {}",
                    catalog.display(),
                    arg
                ));
            }
            options.catalog = Some(arg.into());
        }

        Ok(options)
    }
}

pub fn run(options: Options) {
    let repository = match &options.catalog {
        Some(path) => MovieRepository::from_path(path),
        None => MovieRepository::new(),
    };

    let mut screen = MovieScreen::new(repository);
    screen.load();

    println!("{}", screen.movie_count_text());
    for card in screen.cards() {
        println!();
        println!("{}", card);
    }
}
