//! Hello Greeting Crate
//!
//! The core greeting of the `greet` workspace. Kept deliberately tiny: one
//! formatter and the fallback name it uses, so the workspace wiring stays
//! the interesting part of the template.

/// Name used when the caller does not provide one.
pub const DEFAULT_NAME: &str = "World";

/// Format a hello greeting for `name`, falling back to [`DEFAULT_NAME`].
///
/// Any string is accepted verbatim, including the empty string.
///
/// ```
/// assert_eq!(greet_hello::say_hello(None), "Hello, World!");
/// assert_eq!(greet_hello::say_hello(Some("Alice")), "Hello, Alice!");
/// ```
pub fn say_hello(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
