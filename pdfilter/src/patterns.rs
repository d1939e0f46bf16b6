//! Default detection fragments and personal data names.
//!
//! These are the built-in building blocks the builder combines into the
//! filter's detection pattern and name set. Fragments are plain regex source
//! without flags; the builder compiles the union case-insensitively.

/// Email addresses, including quoted local parts and bracketed IPv4 domains.
pub const EMAIL_PATTERN: &str = r#"(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))"#;

/// GUIDs, optionally wrapped in braces or parentheses.
pub const GUID_PATTERN: &str = r"[{(]?[0-9A-F]{8}-([0-9A-F]{4}-){3}[0-9A-F]{12}[)}]?";

/// Dotted-quad IPv4 addresses.
pub const IPV4_PATTERN: &str = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// IPv6 addresses in full, compressed and IPv4-mapped forms, with an optional zone.
#[rustfmt::skip]
pub const IPV6_PATTERN: &str = r"((([0-9A-Fa-f]{1,4}:){7}([0-9A-Fa-f]{1,4}|:))|(([0-9A-Fa-f]{1,4}:){6}(:[0-9A-Fa-f]{1,4}|((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3})|:))|(([0-9A-Fa-f]{1,4}:){5}(((:[0-9A-Fa-f]{1,4}){1,2})|:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3})|:))|(([0-9A-Fa-f]{1,4}:){4}(((:[0-9A-Fa-f]{1,4}){1,3})|((:[0-9A-Fa-f]{1,4})?:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(([0-9A-Fa-f]{1,4}:){3}(((:[0-9A-Fa-f]{1,4}){1,4})|((:[0-9A-Fa-f]{1,4}){0,2}:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(([0-9A-Fa-f]{1,4}:){2}(((:[0-9A-Fa-f]{1,4}){1,5})|((:[0-9A-Fa-f]{1,4}){0,3}:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(([0-9A-Fa-f]{1,4}:){1}(((:[0-9A-Fa-f]{1,4}){1,6})|((:[0-9A-Fa-f]{1,4}){0,4}:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(:(((:[0-9A-Fa-f]{1,4}){1,7})|((:[0-9A-Fa-f]{1,4}){0,5}:((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:)))(%.+)?";

/// The fragments used when no whole-replacement pattern is configured, in match priority order.
pub const DEFAULT_PATTERNS: [&str; 4] = [EMAIL_PATTERN, GUID_PATTERN, IPV4_PATTERN, IPV6_PATTERN];

/// Field and key names treated as personal data regardless of their content.
pub const DEFAULT_PERSONAL_DATA_NAMES: [&str; 12] = [
    "email",
    "useremail",
    "user",
    "username",
    "userid",
    "accountid",
    "account",
    "password",
    "pass",
    "pwd",
    "ip",
    "ipaddress",
];

/// Joins fragments into one case-insensitive alternation: `(?i)(a)|(b)|...`.
pub(crate) fn union_of<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let alternatives: Vec<String> = fragments
        .into_iter()
        .map(|fragment| format!("({fragment})"))
        .collect();
    format!("(?i){}", alternatives.join("|"))
}
