//! Logging macros with `key => value` context support

/// Log error with a diagnostic code - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::emit($crate::logging::Level::Error, Some($code), $message, &[])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit($crate::logging::Level::Error, Some($code), $message, &context)
        }
    };
}

/// Log warning message - accepts Display types for context values
///
/// An optional leading `code = ...` tags the record with a diagnostic code.
#[macro_export]
macro_rules! log_warning {
    (code = $code:expr, $message:expr) => {
        $crate::logging::emit($crate::logging::Level::Warn, Some($code), $message, &[])
    };

    (code = $code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit($crate::logging::Level::Warn, Some($code), $message, &context)
        }
    };

    ($message:expr) => {
        $crate::logging::emit($crate::logging::Level::Warn, None, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit($crate::logging::Level::Warn, None, $message, &context)
        }
    };
}

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::Level::Info, None, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit($crate::logging::Level::Info, None, $message, &context)
        }
    };
}

/// Log debug message - accepts Display types for context values
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::Level::Debug, None, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit($crate::logging::Level::Debug, None, $message, &context)
        }
    };
}
