//! Farewell greeting for the `greet` workspace.

/// Name used when the caller does not provide one.
pub const DEFAULT_NAME: &str = "Friend";

/// Format a goodbye greeting for `name`, falling back to [`DEFAULT_NAME`].
pub fn say_bye(name: Option<&str>) -> String {
    format!("Goodbye, {}!", name.unwrap_or(DEFAULT_NAME))
}
