use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Picks the filter directive from the CLI flags.
///
/// An explicit level wins over `--verbose`; a bare level such as `info`
/// applies to this crate only.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("doublets={level}"),
        (true, None) => "doublets=debug".to_string(),
        (false, None) => "doublets=warn".to_string(),
    }
}

/// Initialize logging to stderr. `DOUBLETS_LOG` overrides the flags.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env("DOUBLETS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
