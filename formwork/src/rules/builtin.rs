//! Default rule set
//!
//! The conventional rules most forms need, registered under the names
//! the rule-spec language uses (`min:2`, `email`, `whitelist:a,b`,
//! ...). All of them are plain predicates; the engine itself never
//! depends on any particular name existing.

use email_address::EmailAddress;
use regex::Regex;

use crate::Value;
use crate::error::ConfigError;

use super::Context;
use super::Registry;
use super::Rule;

const PHONE: &str = r"^\(?\+?\d{1,4}\)?-?\d{2,4}-?\d{4}$";
const ZIP: &str = r"^[0-9]{3}-?[0-9]{4}$";
const URL: &str = r"(?i)\b(?:(?:https?|ftp)://|www\.)[-a-z0-9+&@#/%?=~_|!:,.;]*[-a-z0-9+&@#/%=~_|]";
const KANA: &str = r"^[\u{30A0}-\u{30FF}]+$";
const JCHARS: &str =
    r"^[\u{3000}-\u{303F}\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{FF00}-\u{FFEF}\u{4E00}-\u{9FAF}]+$";

impl Registry {
    /// Creates a registry populated with the built-in rules.
    ///
    /// | name | args | passes when |
    /// |------|------|-------------|
    /// | `regex` | pattern | value matches the pattern |
    /// | `email` | | value is a valid email address |
    /// | `phone` | | value looks like a phone number |
    /// | `zip` | | value is a 7-digit postal code |
    /// | `url` | | value contains a URL |
    /// | `kana` | | value is katakana |
    /// | `jchars` | | value is Japanese text |
    /// | `number` | | value parses as a number |
    /// | `gt`, `lt` | bound | numeric value is above/below the bound |
    /// | `min`, `max` | length | char count is at least/at most the bound |
    /// | `whitelist` | list | value is one of the listed strings |
    /// | `blacklist` | list | value is none of the listed strings |
    /// | `ext` | list | file name's extension is listed |
    /// | `matches` | field | value equals the named sibling field's value |
    pub fn defaults() -> Self {
        let mut registry = Self::new();

        registry.register_fn("regex", |args| {
            let pattern = require_arg("regex", args)?;
            pattern_rule("regex", pattern)
        });
        registry.register_fn("email", |_args| {
            Ok(bind(|value, _cx| EmailAddress::is_valid(value)))
        });
        registry.register_fn("phone", |_args| pattern_rule("phone", PHONE));
        registry.register_fn("zip", |_args| pattern_rule("zip", ZIP));
        registry.register_fn("url", |_args| pattern_rule("url", URL));
        registry.register_fn("kana", |_args| pattern_rule("kana", KANA));
        registry.register_fn("jchars", |_args| pattern_rule("jchars", JCHARS));
        registry.register_fn("number", |_args| {
            Ok(bind(|value, _cx| value.parse::<f64>().is_ok()))
        });
        registry.register_fn("gt", |args| {
            let bound = numeric_arg("gt", args)?;
            Ok(bind(move |value, _cx| {
                value.parse::<f64>().is_ok_and(|n| n > bound)
            }))
        });
        registry.register_fn("lt", |args| {
            let bound = numeric_arg("lt", args)?;
            Ok(bind(move |value, _cx| {
                value.parse::<f64>().is_ok_and(|n| n < bound)
            }))
        });
        registry.register_fn("min", |args| {
            let min = length_arg("min", args)?;
            Ok(bind(move |value, _cx| value.chars().count() >= min))
        });
        registry.register_fn("max", |args| {
            let max = length_arg("max", args)?;
            Ok(bind(move |value, _cx| value.chars().count() <= max))
        });
        registry.register_fn("whitelist", |args| {
            let list = args.to_vec();
            Ok(bind(move |value, _cx| list.iter().any(|w| w == value)))
        });
        registry.register_fn("blacklist", |args| {
            let list = args.to_vec();
            Ok(bind(move |value, _cx| !list.iter().any(|b| b == value)))
        });
        registry.register_fn("ext", |args| {
            let list = args.to_vec();
            Ok(bind(move |value, _cx| {
                let ext = value.rsplit('.').next().unwrap_or_default();
                list.iter().any(|e| e == ext)
            }))
        });
        registry.register_fn("matches", |args| {
            let other = require_arg("matches", args)?.to_string();
            Ok(bind(move |value, cx| {
                cx.get(&other).is_some_and(|sibling| match sibling {
                    Value::Text(s) => s == value,
                    Value::Many(items) => items.iter().any(|item| item == value),
                })
            }))
        });

        registry
    }
}

fn bind(f: impl Fn(&str, &Context) -> bool + Send + Sync + 'static) -> Rule {
    Box::new(f)
}

fn pattern_rule(rule: &str, pattern: &str) -> Result<Rule, ConfigError> {
    let re =
        Regex::new(pattern).map_err(|err| ConfigError::invalid_args(rule, err.to_string()))?;
    Ok(Box::new(move |value, _cx| re.is_match(value)))
}

fn require_arg<'a>(rule: &str, args: &'a [String]) -> Result<&'a str, ConfigError> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| ConfigError::invalid_args(rule, "missing argument"))
}

fn numeric_arg(rule: &str, args: &[String]) -> Result<f64, ConfigError> {
    let raw = require_arg(rule, args)?;
    raw.parse()
        .map_err(|_| ConfigError::invalid_args(rule, format!("'{raw}' is not a number")))
}

fn length_arg(rule: &str, args: &[String]) -> Result<usize, ConfigError> {
    let raw = require_arg(rule, args)?;
    raw.parse()
        .map_err(|_| ConfigError::invalid_args(rule, format!("'{raw}' is not a length")))
}
