//! Logger setup shared by slowOS apps.
//!
//! `RUST_LOG` wins when set; otherwise the app's configured level is used.

use env_logger::{Builder, Env};
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global logger. Later calls are ignored.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let level = normalize_level(default_level);
        Builder::from_env(Env::default().default_filter_or(level))
            .format_timestamp(None)
            .try_init()
            .ok();
        log::debug!("logger ready (default level {})", level);
    });
}

/// Map a user-supplied level name onto one env_logger understands.
/// Unknown names fall back to "info".
pub fn normalize_level(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" | "quiet" => "off",
        "error" => "error",
        "warn" | "warning" => "warn",
        "debug" => "debug",
        "trace" => "trace",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level(" warning "), "warn");
        assert_eq!(normalize_level("quiet"), "off");
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }

    #[test]
    fn test_init_twice() {
        init("warn");
        init("trace");
    }
}
