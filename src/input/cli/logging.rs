use tracing::Level;

/// Installs a stderr fmt subscriber. stdout is left for rendered output.
///
/// Returns `false` when a global subscriber was already set.
pub fn init_logging(verbose: bool) -> bool {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        init_logging(false);

        assert!(!init_logging(true));
    }
}
