//! Rendering grouped rules as CSS text.
//!
//! Output follows the expanded style of Sass:
//!
//! ```css
//! .c1, .c2 {
//!   top: 0;
//! }
//! ```
//!
//! Rules are separated by a blank line. Bodies are split on top-level `;`
//! (not inside strings or parentheses) and each declaration is written on its
//! own line.

use std::fmt::Write;

use cssel::parser::split_declarations;

use crate::rule::GroupedRule;

const INDENT: &str = "  ";

pub fn render(rules: &[GroupedRule]) -> String {
    let mut css = String::new();
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        render_rule(&mut css, rule);
    }
    css
}

fn render_rule(css: &mut String, rule: &GroupedRule) {
    let _ = writeln!(css, "{} {{", rule.selector_text());
    for declaration in split_declarations(rule.body()) {
        let _ = writeln!(css, "{INDENT}{declaration};");
    }
    css.push_str("}\n");
}
