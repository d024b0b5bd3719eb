use crate::core::rules::{default_rules, RuleKind, SubstitutionRule};
use crate::domain::model::RuleHit;
use crate::utils::error::Result;

/// 依序把每條規則套用到整份（持續變化中的）文字上
#[derive(Debug, Clone)]
pub struct TextRewriter {
    rules: Vec<SubstitutionRule>,
}

impl TextRewriter {
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(default_rules()?))
    }

    pub fn with_rules(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    pub fn rewrite(&self, content: &str) -> (String, Vec<RuleHit>) {
        let mut current = content.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            if count > 0 {
                tracing::trace!("rule {} matched {} time(s)", rule.name(), count);
                if rule.kind() == RuleKind::DuplicateCollapse {
                    tracing::debug!("collapsed {} duplicate score field(s)", count);
                }
            }
            hits.push(RuleHit {
                rule: rule.name().to_string(),
                count,
            });
            current = next;
        }

        (current, hits)
    }

    pub fn rewrite_text(&self, content: &str) -> String {
        self.rewrite(content).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> TextRewriter {
        TextRewriter::new().unwrap()
    }

    #[test]
    fn test_structural_merge_then_renames() {
        let input = "\
      return {
        resultType: 'foo',
        rawValue: 42,
        normalizedScore: 0.9,
        confidenceLevel: 'high',
        evidence: {}
      }
";
        let expected = "\
      return {
        type: 'foo',
        score: 42,
        confidence: 'high',
        evidence: {}
      }
";
        assert_eq!(rewriter().rewrite_text(input), expected);
    }

    #[test]
    fn test_unscoped_rename_only() {
        assert_eq!(rewriter().rewrite_text("rawValue: 7,\n"), "score: 7,\n");
    }

    #[test]
    fn test_unscoped_rename_leaves_rest_untouched() {
        let input = "const x = { rawValue: 7, label: 'rawValue' }";
        assert_eq!(
            rewriter().rewrite_text(input),
            "const x = { score: 7, label: 'rawValue' }"
        );
    }

    #[test]
    fn test_duplicate_score_collapse() {
        let input = "  score: 1,\n  score: 2,\n";
        assert_eq!(rewriter().rewrite_text(input), "  score: 1,\n");
    }

    #[test]
    fn test_adjacent_fields_without_result_type_collapse() {
        let input = "{\n  rawValue: 10,\n  normalizedScore: 11,\n}";
        assert_eq!(rewriter().rewrite_text(input), "{\n  score: 10,\n}");
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let input = "\
  resultType: 'web_citations',
  rawValue: score,
  normalizedScore: score,
  confidenceLevel: 0.8,
";
        let rw = rewriter();
        assert_eq!(rw.rewrite_text(input), rw.rewrite_text(input));
    }

    #[test]
    fn test_converted_content_is_stable() {
        let converted = "\
      return {
        type: 'media_presence',
        score: score,
        confidence: 0.6,
        evidence: { brandName }
      }
";
        let (out, hits) = rewriter().rewrite(converted);
        assert_eq!(out, converted);
        assert!(hits.iter().all(|hit| hit.count == 0));
    }

    #[test]
    fn test_second_pass_is_noop() {
        let input = "\
        resultType: 'authority_analysis',
        rawValue: evaluation.score,
        normalizedScore: evaluation.score,
        confidenceLevel: evaluation.confidence,
";
        let rw = rewriter();
        let once = rw.rewrite_text(input);
        assert_eq!(rw.rewrite_text(&once), once);
    }

    #[test]
    fn test_hits_are_reported_per_rule() {
        let input = "\
  resultType: 'foo',
  rawValue: 1,
  normalizedScore: 1,
  confidenceLevel: 0.5,
";
        let (_, hits) = rewriter().rewrite(input);
        let count_of = |name: &str| {
            hits.iter()
                .find(|hit| hit.rule == name)
                .map(|hit| hit.count)
                .unwrap()
        };

        assert_eq!(hits.len(), 6);
        assert_eq!(count_of("structural-merge"), 1);
        assert_eq!(count_of("rename-resultType"), 1);
        assert_eq!(count_of("rename-rawValue"), 0);
        assert_eq!(count_of("rename-normalizedScore"), 0);
        assert_eq!(count_of("rename-confidenceLevel"), 1);
        assert_eq!(count_of("collapse-duplicate-score"), 0);
    }

    #[test]
    fn test_comma_in_raw_value_is_not_truncated() {
        // 含逗號的運算式不會觸發結構合併，改由改名規則處理
        let input = "\
  resultType: 'x',
  rawValue: Math.min(a, b),
  normalizedScore: 5,
  confidenceLevel: 0.5,
";
        let (out, hits) = rewriter().rewrite(input);
        assert!(out.contains("score: Math.min(a, b),"));
        assert!(!out.contains("rawValue"));
        assert!(!out.contains("normalizedScore"));
        assert_eq!(hits[0].count, 0);
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let rw = TextRewriter::with_rules(Vec::new());
        assert_eq!(rw.rewrite_text("rawValue: 1,"), "rawValue: 1,");
    }
}
