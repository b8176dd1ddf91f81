//! Test logging utilities
//!
//! The crate logs through `tracing`; with no subscriber installed, events
//! are forwarded to the `log` facade, which `env_logger` prints. Set
//! `RUST_LOG=dbassert=debug` to see every generated existence query.

use env_logger::Env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` as the `log` backend for tests
///
/// `tracing` events from this crate reach the logger through the `log`
/// feature of `tracing`, which forwards events whenever no `tracing`
/// subscriber is set. Without `RUST_LOG` only warnings are printed, which
/// covers every failed assertion. Only the first call installs the logger.
///
/// # Examples
///
/// ```
/// use dbassert::logging::init_test_logging;
///
/// init_test_logging();
/// init_test_logging();
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
			.is_test(true)
			.try_init();
	});
}
