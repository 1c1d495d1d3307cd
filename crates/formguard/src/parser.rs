//! Rule-expression parser.
//!
//! Grammar:
//!
//! ```text
//! rules := token ('|' token)*
//! token := ['!'] name ['[' param ']']
//! name  := one or more non-'[' non-'|' characters
//! param := any characters except a final ']'
//! ```
//!
//! A token only counts as parameterized when the bracket pair is well
//! formed and non-empty: `min_length[]` stays the bare name
//! `min_length[]`, which resolves to an unknown (always-passing) rule.
//! The param runs from the first `[` to the token's final `]`, so a `]`
//! inside the param text is preserved.

use smallvec::SmallVec;

use crate::rules::Rule;

/// Parses a full rule expression into resolved rules, preserving order.
/// Order is significant: the first failing rule produces the field's error.
pub(crate) fn parse_rules(rules: &str) -> SmallVec<[Rule; 4]> {
    rules.split('|').map(parse_token).collect()
}

fn parse_token(token: &str) -> Rule {
    let (negated, token) = match token.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if let Some(open) = token.find('[') {
        // name and param must both be non-empty, and the token must close
        // with ']' after at least one param character
        if open > 0 && token.ends_with(']') && open + 1 < token.len() - 1 {
            let name = &token[..open];
            let param = &token[open + 1..token.len() - 1];
            return Rule::resolve(name, Some(param), negated);
        }
    }

    Rule::resolve(token, None, negated)
}

// ============================================================================
// TESTS
// ============================================================================
