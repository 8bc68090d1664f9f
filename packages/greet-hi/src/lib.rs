//! Casual greeting for the `greet` workspace.

/// Name used when the caller does not provide one.
pub const DEFAULT_NAME: &str = "Friend";

/// Format a hi greeting for `name`, falling back to [`DEFAULT_NAME`].
pub fn say_hi(name: Option<&str>) -> String {
    format!("Hi, {}!", name.unwrap_or(DEFAULT_NAME))
}
