//! Parser for rule-spec strings

use serde::Deserialize;
use serde::Serialize;

/// Default separator between rule clauses.
pub const RULE_SEPARATOR: char = '|';

/// Default separator between a rule name and its argument string.
pub const ARG_SEPARATOR: char = ':';

/// One parsed rule clause: a rule name plus its bound arguments.
///
/// Descriptors are immutable once parsed; their order in the parsed
/// sequence is the order rules are evaluated in, which in turn is the
/// order failed rule names are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Rule name, resolved against a registry at build time.
    pub name: String,
    /// Ordered textual arguments, empty when the clause had none.
    pub args: Vec<String>,
}

impl RuleDescriptor {
    /// Creates a descriptor without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a descriptor with arguments.
    pub fn with_args<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses a rule-spec string with the default separators.
///
/// An empty spec (or one consisting only of separators) parses to an
/// empty sequence, which is how fields without validation are declared.
///
/// # Example
///
/// ```
/// use formwork::dsl::parse;
///
/// let rules = parse("min:2|email");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[0].name, "min");
/// assert_eq!(rules[0].args, vec!["2"]);
/// assert_eq!(rules[1].name, "email");
/// ```
pub fn parse(spec: &str) -> Vec<RuleDescriptor> {
    parse_with(spec, RULE_SEPARATOR, ARG_SEPARATOR)
}

/// Parses a rule-spec string with custom separators.
///
/// Each clause splits on the first `arg_sep` into a name and an
/// optional argument string; the argument string splits on `,` into
/// ordered args. There is no escaping: a literal comma or separator
/// inside an argument is not representable. Known limitation.
pub fn parse_with(spec: &str, rule_sep: char, arg_sep: char) -> Vec<RuleDescriptor> {
    spec.split(rule_sep)
        .filter(|clause| !clause.is_empty())
        .map(|clause| parse_clause(clause, arg_sep))
        .collect()
}

/// Returns true when the spec contains a clause literally named
/// `required`.
///
/// Legacy specs signalled requiredness inline instead of through the
/// field's `required` flag;
/// [`compile`](crate::validator::ValidatorFactory::compile) uses this
/// to honour them.
pub fn spec_requires(spec: &str) -> bool {
    parse(spec).iter().any(|d| d.name == "required")
}

fn parse_clause(clause: &str, arg_sep: char) -> RuleDescriptor {
    match clause.split_once(arg_sep) {
        Some((name, args)) if !args.is_empty() => RuleDescriptor {
            name: name.to_string(),
            args: args.split(',').map(|a| a.to_string()).collect(),
        },
        Some((name, _)) => RuleDescriptor::new(name),
        None => RuleDescriptor::new(clause),
    }
}
