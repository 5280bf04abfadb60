//! Method-style accessor names.
//!
//! Hosts may receive calls such as `getFirstNameAttribute`. The part
//! between the prefix and the `Attribute` suffix names the attribute in
//! camel case; bags use snake case, so `FirstName` becomes `first_name`.

use std::sync::OnceLock;

use heck::ToSnakeCase;
use regex_lite::Regex;

fn accessor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(get|set)(.+)Attribute$").expect("accessor pattern is a valid regex")
    })
}

/// The attribute key addressed by an accessor method name, if any.
pub fn attribute_key(method: &str) -> Option<String> {
    accessor_pattern()
        .captures(method)
        .and_then(|captures| captures.get(2))
        .map(|name| name.as_str().to_snake_case())
}
