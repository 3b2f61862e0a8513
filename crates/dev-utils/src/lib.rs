use tracing_subscriber::{fmt, prelude::*, registry::Registry};

/// Install a panic backtrace printer and, when the crate under test was built
/// with `DEBUG` set, a `tracing` subscriber that prints the engine's
/// truncation events next to the test output.
pub fn setup_test_log() {
    color_backtrace::install();
    if option_env!("DEBUG").is_some() {
        let subscriber = Registry::default().with(
            fmt::Layer::default()
                .with_test_writer()
                .with_line_number(true)
                .with_file(true),
        );
        tracing::subscriber::set_global_default(subscriber).unwrap();
    }
}
