//! Logger setup (reads RUST_LOG env var, CLI level as the default filter).

use log::LevelFilter;

pub fn setup(level: &str) {
    env_logger::Builder::from_default_env()
        .filter_level(level_filter(level))
        .init();
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_default_to_info() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("verbose"), LevelFilter::Info);
        assert_eq!(level_filter(""), LevelFilter::Info);
    }
}
