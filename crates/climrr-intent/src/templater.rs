//! Placeholder scanner for question/answer templates.
//!
//! Collects simple `{name}` variables and `{{ expr }}` / `{expr:...}`
//! expressions. Nothing is evaluated.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z0-9_~]+)\}").unwrap());

static RE_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.+?)\}\}|\{expr:([^}]+)\}").unwrap());

/// Split template text into its variable names and expression strings.
///
/// Expressions keep their order of appearance and are trimmed.
pub fn separate_vars_and_exprs(text: &str) -> (BTreeSet<String>, Vec<String>) {
    let variables = RE_VARIABLE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    let expressions = RE_EXPRESSION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    (variables, expressions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_and_double_brace_expression() {
        let (vars, exprs) =
            separate_vars_and_exprs("{precipann_hist} compared to {{precipann_hist * 2}}");
        assert_eq!(vars, BTreeSet::from(["precipann_hist".to_string()]));
        assert_eq!(exprs, vec!["precipann_hist * 2"]);
    }

    #[test]
    fn expr_prefix_form() {
        let (vars, exprs) =
            separate_vars_and_exprs("In {Location}: {expr: tempmax - tempmin } degrees");
        assert_eq!(vars, BTreeSet::from(["Location".to_string()]));
        assert_eq!(exprs, vec!["tempmax - tempmin"]);
    }

    #[test]
    fn expressions_keep_order() {
        let (_, exprs) = separate_vars_and_exprs("{{ b }} then {expr:a} then {{c}}");
        assert_eq!(exprs, vec!["b", "a", "c"]);
    }

    #[test]
    fn variables_are_deduplicated() {
        let (vars, _) = separate_vars_and_exprs("{hdd_hist} and {hdd_hist} and {cdd~hist}");
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("cdd~hist"));
    }

    #[test]
    fn plain_text_has_nothing() {
        let (vars, exprs) = separate_vars_and_exprs("no placeholders { here }");
        assert!(vars.is_empty());
        assert!(exprs.is_empty());
    }
}
