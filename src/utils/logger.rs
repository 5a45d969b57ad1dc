use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "tutoring_site=debug,info"
    } else {
        "tutoring_site=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init(verbose: bool, format: LogFormat) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let layer = match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(verbose))
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init(verbose, LogFormat::Compact);
}

/// JSON lines for CI builds, where the log is collected rather than read.
pub fn init_json_logger(verbose: bool) {
    init(verbose, LogFormat::Json);
}

