//! Ordered keyword rule tables.
//!
//! A table is an ordered list of `(trigger, reply)` rules plus a default
//! rule. Matching returns the first rule whose trigger holds, so overlapping
//! triggers resolve by declaration order. Reordering rules changes behaviour.

use std::fmt;

/// When a rule fires. Matching runs on lowercased input.
#[derive(Clone, Copy)]
pub enum Trigger {
    /// Any phrase is a substring of the input.
    Any(&'static [&'static str]),
    /// Every group has at least one phrase in the input.
    AllOf(&'static [&'static [&'static str]]),
    /// Arbitrary test, for patterns that are not phrase lists.
    Matches(fn(&str) -> bool),
}

impl Trigger {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::Any(phrases) => contains_any(normalized, phrases),
            Trigger::AllOf(groups) => groups.iter().all(|group| contains_any(normalized, group)),
            Trigger::Matches(test) => test(normalized),
        }
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Any(phrases) => f.debug_tuple("Any").field(phrases).finish(),
            Trigger::AllOf(groups) => f.debug_tuple("AllOf").field(groups).finish(),
            Trigger::Matches(_) => f.write_str("Matches(..)"),
        }
    }
}

fn contains_any(normalized: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| normalized.contains(phrase))
}

/// One entry of a rule table.
#[derive(Debug, Clone)]
pub struct Rule<R> {
    pub id: &'static str,
    pub trigger: Trigger,
    pub reply: R,
}

impl<R> Rule<R> {
    pub fn new(id: &'static str, trigger: Trigger, reply: R) -> Self {
        Self { id, trigger, reply }
    }
}

/// First-match-wins rule list with a catch-all default.
#[derive(Debug, Clone)]
pub struct RuleTable<R> {
    rules: Vec<Rule<R>>,
    default_id: &'static str,
    default_reply: R,
}

/// The rule returned by [`RuleTable::match_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'a, R> {
    pub id: &'static str,
    pub reply: &'a R,
    /// `true` when no declared rule fired
    pub is_default: bool,
}

impl<R> RuleTable<R> {
    pub fn new(rules: Vec<Rule<R>>, default_id: &'static str, default_reply: R) -> Self {
        Self {
            rules,
            default_id,
            default_reply,
        }
    }

    /// Returns the first rule whose trigger holds, else the default rule.
    pub fn match_rule(&self, normalized: &str) -> Matched<'_, R> {
        let matched = self
            .rules
            .iter()
            .find(|rule| rule.trigger.matches(normalized))
            .map(|rule| Matched {
                id: rule.id,
                reply: &rule.reply,
                is_default: false,
            })
            .unwrap_or(Matched {
                id: self.default_id,
                reply: &self.default_reply,
                is_default: true,
            });

        tracing::debug!(rule = matched.id, is_default = matched.is_default, "Rule matched");
        matched
    }

    /// Declared rules in order, without the default.
    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// Rule ids in declaration order, default last.
    pub fn ids(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.id)
            .chain(std::iter::once(self.default_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable<u8> {
        RuleTable::new(
            vec![
                Rule::new("first", Trigger::Any(&["apple", "pear"]), 1),
                Rule::new("second", Trigger::Any(&["pear", "plum"]), 2),
                Rule::new("both", Trigger::AllOf(&[&["yes"], &["buy", "want"]]), 3),
                Rule::new("long", Trigger::Matches(|s| s.len() > 30), 4),
            ],
            "default",
            0,
        )
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        assert_eq!(*table.match_rule("a pear and a plum").reply, 1);
        assert_eq!(*table.match_rule("just a plum").reply, 2);
    }

    #[test]
    fn test_all_of_requires_every_group() {
        let table = table();
        assert_eq!(table.match_rule("yes i want").id, "both");
        assert!(table.match_rule("yes").is_default);
    }

    #[test]
    fn test_custom_matcher() {
        let table = table();
        assert_eq!(table.match_rule("this sentence is longer than thirty chars").id, "long");
    }

    #[test]
    fn test_default_is_total() {
        let table = table();
        let matched = table.match_rule("zzz_no_match_zzz");
        assert!(matched.is_default);
        assert_eq!(*matched.reply, 0);
        assert_eq!(table.ids(), ["first", "second", "both", "long", "default"]);
    }
}
