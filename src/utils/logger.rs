use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("course_register=debug,info")
        } else {
            EnvFilter::new("course_register=info")
        }
    })
}

/// Diagnostics go to stderr so the report on stdout stays clean.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Directives for the library and the `toml-register` binary, which logs
/// under its own target.
fn level_directives(level: &str) -> String {
    format!("course_register={level},toml_register={level}")
}

/// Installs a logger from a level name such as `warn` or `debug`.
pub fn init_with_level(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directives(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directives_cover_toml_binary() {
        let directives = level_directives("debug");
        assert!(directives.contains("course_register=debug"));
        assert!(directives.contains("toml_register=debug"));

        let filter = EnvFilter::new(directives);
        assert!(filter.to_string().contains("toml_register=debug"));
    }
}
