//! Runtime setup: worker pool and logging

use tracing_subscriber::EnvFilter;

/// Configure the rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }
    if let Err(e) = builder.build_global() {
        tracing::debug!("thread pool already configured: {e}");
    }
}

/// Filter level for `-v` counts. Without flags `RUST_LOG` decides.
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

/// Install a stderr `fmt` subscriber. `log` records from dependencies are
/// forwarded to it.
pub fn init_logging(verbose: u8) {
    let filter = match verbosity_level(verbose) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("info"));
        assert_eq!(verbosity_level(5), Some("debug"));
    }
}
