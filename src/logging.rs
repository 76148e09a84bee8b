use env_logger::Target;

/// Logs go to stderr so the printed movie list on stdout stays clean.
pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder
        .target(Target::Stderr)
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("movie_catalog"), log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
