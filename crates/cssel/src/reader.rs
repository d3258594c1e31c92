//! Reading selectors back out of rendered CSS.
//!
//! [`StyleReader`] splits rendered stylesheet text into rules and reports,
//! per rule, the selector text, the specificity of its first selector, and
//! the body content. Specificity is recomputed from the text with
//! [`calculate`], independent of whatever produced the stylesheet.
//!
//! ```rust
//! use cssel::reader::StyleReader;
//!
//! let reader = StyleReader::new("html .c1.\\--o1 {\n  left: 1;\n}\n");
//! let rule = reader.selector(0).unwrap();
//! assert_eq!(rule.value, "html .c1.\\--o1");
//! assert_eq!(rule.score.to_string(), "0,0,2,1");
//! assert_eq!(rule.content, "left: 1;");
//! ```

use std::path::Path;

use crate::CsselError;
use crate::parser::{parse_rules, parse_selector_group, strip_comments};
use crate::selector::Specificity;

/// One rule read back from stylesheet text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadRule {
    /// Selector text, trimmed.
    pub value: String,
    /// Specificity of the first selector in the list.
    pub score: Specificity,
    /// Body text between the braces, trimmed.
    pub content: String,
}

/// Rendered stylesheet text ready for inspection.
#[derive(Clone, Debug, Default)]
pub struct StyleReader {
    contents: String,
}

impl StyleReader {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Reads a stylesheet from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CsselError> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Every rule in source order.
    pub fn selectors(&self) -> Result<Vec<ReadRule>, CsselError> {
        let source = strip_comments(&self.contents);
        let (remaining, blocks) =
            parse_rules(&source).map_err(|e| CsselError::InvalidSyntax(e.to_string()))?;

        if !remaining.is_empty() {
            return Err(CsselError::InvalidSyntax(format!(
                "Unexpected tokens at end of stylesheet: {}",
                remaining.trim()
            )));
        }
        if blocks.is_empty() {
            return Err(CsselError::Empty);
        }

        blocks
            .into_iter()
            .map(|block| {
                let score = calculate(block.selector)?
                    .first()
                    .copied()
                    .unwrap_or_default();
                Ok(ReadRule {
                    value: block.selector.to_string(),
                    score,
                    content: block.body.to_string(),
                })
            })
            .collect()
    }

    /// The rule at `index`, in source order.
    pub fn selector(&self, index: usize) -> Result<ReadRule, CsselError> {
        self.selectors()?
            .into_iter()
            .nth(index)
            .ok_or(CsselError::MissingRule(index))
    }
}

/// Every rule of `css`, in source order.
pub fn read_rules(css: &str) -> Result<Vec<ReadRule>, CsselError> {
    StyleReader::new(css).selectors()
}

/// Specificity of each selector in a comma-separated selector group.
pub fn calculate(selector_text: &str) -> Result<Vec<Specificity>, CsselError> {
    let list = parse_selector_group(selector_text)?;
    Ok(list.selectors.iter().map(|s| s.specificity()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_each_selector() {
        let scores = calculate(r"html#app .\+t1 .c1\.p1.\--o1, .c2").unwrap();
        assert_eq!(
            scores,
            vec![Specificity::new(0, 1, 3, 1), Specificity::new(0, 0, 1, 0)]
        );
    }

    #[test]
    fn test_reader_scores_first_selector_only() {
        let reader = StyleReader::new(".c1:hover, #x {\n  top: 0;\n}\n");
        let rule = reader.selector(0).unwrap();
        assert_eq!(rule.score.to_string(), "0,0,2,0");
    }

    #[test]
    fn test_read_rules_keeps_source_order() {
        let rules = read_rules(".c2 {\n  top: 0;\n}\n\n.c1 {\n  left: 1;\n}\n").unwrap();
        let values: Vec<&str> = rules.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec![".c2", ".c1"]);
        assert_eq!(rules[1].content, "left: 1;");
    }

    #[test]
    fn test_reader_missing_rule() {
        let reader = StyleReader::new(".c1 { top: 0; }");
        assert!(matches!(
            reader.selector(3),
            Err(CsselError::MissingRule(3))
        ));
    }

    #[test]
    fn test_reader_empty_stylesheet() {
        let reader = StyleReader::new("  \n");
        assert!(matches!(reader.selectors(), Err(CsselError::Empty)));
    }

    #[test]
    fn test_reader_from_file() {
        let path = std::env::temp_dir().join(format!("cssel-reader-{}.css", std::process::id()));
        std::fs::write(&path, ".\\@l1 {\n  top: 0;\n}\n").unwrap();

        let rules = StyleReader::from_file(&path).unwrap().selectors().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].value, r".\@l1");
    }
}
