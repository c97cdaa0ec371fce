//! Log output on stderr, filtered by `RUST_LOG` or the `-v` count.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Skipped builders are already reported as diagnostics, so the library
/// crates stay at `error` unless asked for more.
fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "fluent=warn,fluent_codegen=error,fluent_codegen_java=error",
        1 => "fluent=debug,fluent_codegen=debug,fluent_codegen_java=debug",
        _ => "fluent=trace,fluent_codegen=trace,fluent_codegen_java=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_verbosity() {
        assert!(directive_for_verbosity(0).starts_with("fluent=warn"));
        assert!(directive_for_verbosity(1).contains("fluent_codegen=debug"));
        assert_eq!(directive_for_verbosity(2), directive_for_verbosity(9));
    }
}
