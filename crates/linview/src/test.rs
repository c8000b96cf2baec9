use log::LevelFilter;

/// Installs `env_logger` for unit tests, logging this crate at *trace* level.
///
/// `RUST_LOG` overrides the defaults. Does nothing if a logger is already registered.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Trace)
        .is_test(true)
        .parse_default_env()
        .try_init()
        .ok();
}
