//! Logging setup and shared error-reporting helpers.

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::errors::PyextError;

/// Environment variable selecting the log output format (`json` or `text`).
pub const LOG_FORMAT_ENV: &str = "PYEXT_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise quiet mode logs warnings and above,
/// verbose mode logs info and above. Logs go to stderr so command output on
/// stdout stays machine-readable. Calling this twice is harmless: the second
/// install attempt is ignored.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // Already installed (tests, embedding hosts).
    let _ = result;
}

/// Log an application error at the level its kind deserves.
pub fn log_app_error(error: &dyn PyextError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error",
            error_code = error.error_code(),
            error = %error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }

    #[test]
    fn log_app_error_does_not_panic() {
        let error = ConfigError::InvalidConfiguration {
            message: "bad".to_string(),
        };
        log_app_error(&error);
    }
}
