use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("ABSTRAK_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Shortens a text to at most `max` characters for diagnostics, appending an
/// ellipsis when something was cut.
///
/// # Examples
///
/// ```
/// use abstrak::log::preview;
///
/// assert_eq!(preview("hello", 10), "hello");
/// assert_eq!(preview("hello world", 5), "hello…");
/// ```
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

/// Logs a debug message with optional formatted arguments.
///
/// Messages go to stderr so cleaned output on stdout stays untouched.
///
/// # Examples
///
/// ```
/// use std::env;
/// use abstrak::debug;
///
/// env::set_var("ABSTRAK_DEBUG", "true");
///
/// debug!("Chain built");
/// debug!("Stage {} produced {} chars", "lower", 42);
///
/// env::remove_var("ABSTRAK_DEBUG");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
