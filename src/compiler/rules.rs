//! Ordered rule table mapping node keys to component constructors
//!
//! Rules are tried top-to-bottom and patterns within a rule left-to-right;
//! the first pattern that matches a key wins and no further rules are
//! consulted. Patterns are unanchored searches over the whole key text.
//!
//! Rule order is load-bearing: the digit-prefixed columns rule must come
//! before the bare columns rule, whose pattern also matches its keys.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Which constructor a matched key selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleKind {
    /// `dashboard "TITLE"` / `dashboard 'TITLE'`
    Dashboard,
    /// `TAG text`
    Text,
    /// `rows`
    Rows,
    /// `N columns`
    SizedColumns,
    /// `columns`
    Columns,
    /// `dropdown VAR=DEFAULT`
    Dropdown,
    /// `[stacked ]WORD chart|plot|diagram|graph`
    Chart,
    /// `[stacked ]${VAR} chart|plot|diagram|graph`
    PlaceholderChart,
}

/// One dispatch rule: the patterns that select it, in priority order
struct Rule {
    patterns: Vec<Regex>,
    kind: RuleKind,
}

static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// The compiled rule table, built on first access
fn rules() -> &'static [Rule] {
    RULES.get_or_init(build_rules)
}

fn build_rules() -> Vec<Rule> {
    fn rule(patterns: &[&str], kind: RuleKind) -> Rule {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("rule pattern compiles"))
            .collect();
        Rule { patterns, kind }
    }

    vec![
        rule(
            &[r#"dashboard "([^"]*)""#, r"dashboard '([^']*)'"],
            RuleKind::Dashboard,
        ),
        rule(&[r"(.*) text"], RuleKind::Text),
        rule(&[r"rows"], RuleKind::Rows),
        rule(&[r"([1-9]+) columns"], RuleKind::SizedColumns),
        rule(&[r"columns"], RuleKind::Columns),
        rule(&[r"dropdown ([^=]+)=(.*)"], RuleKind::Dropdown),
        rule(
            &[r"(stacked)? *([a-z]+) (chart|plot|diagram|graph)"],
            RuleKind::Chart,
        ),
        rule(
            &[r"(stacked)? *\$\{(\w+)\} (chart|plot|diagram|graph)"],
            RuleKind::PlaceholderChart,
        ),
    ]
}

/// Find the first rule whose pattern matches `key`
pub(crate) fn match_key(key: &str) -> Option<(RuleKind, Captures<'_>)> {
    for rule in rules() {
        for pattern in &rule.patterns {
            if let Some(caps) = pattern.captures(key) {
                return Some((rule.kind, caps));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(key: &str) -> Option<RuleKind> {
        match_key(key).map(|(kind, _)| kind)
    }

    #[test]
    fn test_dashboard_title_capture() {
        let (kind, caps) = match_key(r#"dashboard "Sales""#).unwrap();
        assert_eq!(kind, RuleKind::Dashboard);
        assert_eq!(&caps[1], "Sales");

        let (kind, caps) = match_key("dashboard 'Ops'").unwrap();
        assert_eq!(kind, RuleKind::Dashboard);
        assert_eq!(&caps[1], "Ops");
    }

    #[test]
    fn test_text_tag_capture() {
        let (kind, caps) = match_key("p text").unwrap();
        assert_eq!(kind, RuleKind::Text);
        assert_eq!(&caps[1], "p");
    }

    #[test]
    fn test_sized_columns_takes_priority_over_bare_columns() {
        let (kind, caps) = match_key("3 columns").unwrap();
        assert_eq!(kind, RuleKind::SizedColumns);
        assert_eq!(&caps[1], "3");

        assert_eq!(kind_of("columns"), Some(RuleKind::Columns));
    }

    #[test]
    fn test_zero_digit_falls_back_to_bare_columns() {
        // "10" contains a zero, so the sized pattern cannot match it.
        assert_eq!(kind_of("10 columns"), Some(RuleKind::Columns));
    }

    #[test]
    fn test_dropdown_captures_variable_and_default() {
        let (kind, caps) = match_key("dropdown country=US").unwrap();
        assert_eq!(kind, RuleKind::Dropdown);
        assert_eq!(&caps[1], "country");
        assert_eq!(&caps[2], "US");
    }

    #[test]
    fn test_chart_variants() {
        let (kind, caps) = match_key("bar chart").unwrap();
        assert_eq!(kind, RuleKind::Chart);
        assert!(caps.get(1).is_none());
        assert_eq!(&caps[2], "bar");

        let (kind, caps) = match_key("stacked area plot").unwrap();
        assert_eq!(kind, RuleKind::Chart);
        assert!(caps.get(1).is_some());
        assert_eq!(&caps[2], "area");
    }

    #[test]
    fn test_placeholder_chart() {
        let (kind, caps) = match_key("stacked ${chart_type} graph").unwrap();
        assert_eq!(kind, RuleKind::PlaceholderChart);
        assert!(caps.get(1).is_some());
        assert_eq!(&caps[2], "chart_type");
    }

    #[test]
    fn test_unknown_key_matches_nothing() {
        assert_eq!(kind_of("foobar"), None);
        assert_eq!(kind_of("text"), None);
    }
}
