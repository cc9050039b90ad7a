use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);
static COLOR: AtomicBool = AtomicBool::new(false);

///
/// Level
///

#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Debug = 0, // least severe
    Info = 1,
    #[default]
    Warn = 2,
    Error = 3, // most severe
}

impl Level {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Config,
    Expand,
    Flatten,
    Hidden,
    Resource,
    Variant,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        if $crate::log::enabled(level) {
            let topic_opt: Option<&str> = $topic;
            let message = format!($fmt $(, $arg)*);
            let line = $crate::log::__format_line(level, topic_opt, &message);

            eprintln!("{line}");
        }
    }};
}

/// Install the threshold and colour flag used by [`log!`].
pub fn configure(min_level: Level, color: bool) {
    MIN_LEVEL.store(min_level as u8, Ordering::Relaxed);
    COLOR.store(color, Ordering::Relaxed);
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    level >= Level::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

///
/// Helpers
///

#[doc(hidden)]
#[must_use]
pub fn __format_line(level: Level, topic: Option<&str>, message: &str) -> String {
    let topic_disp = topic.unwrap_or("...");
    let topic_centered = format!("{topic_disp:^9}");

    let (color, reset) = if COLOR.load(Ordering::Relaxed) {
        match level {
            Level::Info => ("\x1b[34m", "\x1b[0m"),
            Level::Warn => ("\x1b[33m", "\x1b[0m"),
            Level::Error => ("\x1b[31m", "\x1b[0m"),
            Level::Debug => ("", ""),
        }
    } else {
        ("", "")
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());

    format!("{label}|{topic_centered}| {message}")
}

///
/// TESTS
///
