use crate::utils::error::Result;
use regex::{Captures, Regex};

/// resultType / rawValue / normalizedScore / confidenceLevel 四行連續出現時，
/// 保留 resultType，將 rawValue 改為 score，刪除 normalizedScore。
/// confidenceLevel 原樣保留，交給後面的改名規則處理。
pub const STRUCTURAL_MERGE_PATTERN: &str = r"(resultType:\s*'[^']+',\s*)\n(\s*)rawValue:\s*([^,]+),\s*\n\s*normalizedScore:\s*[^,]+,\s*\n(\s*)confidenceLevel:";
pub const STRUCTURAL_MERGE_REPLACEMENT: &str = "${1}\n${2}score: ${3},\n${4}confidenceLevel:";

/// 無條件改名，依序套用
pub const FIELD_RENAMES: [(&str, &str); 4] = [
    ("resultType", "type"),
    ("rawValue", "score"),
    ("normalizedScore", "score"),
    ("confidenceLevel", "confidence"),
];

/// 連續兩行 score: 只保留第一行
pub const DUPLICATE_SCORE_PATTERN: &str = r"(\s+score:\s*[^,]+,)\s*\n\s*score:\s*[^,]+,";
pub const DUPLICATE_SCORE_REPLACEMENT: &str = "${1}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    StructuralMerge,
    FieldRename,
    DuplicateCollapse,
}

/// 一條 (pattern, replacement) 替換規則，套用在整份文字上
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    name: String,
    kind: RuleKind,
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    pub fn new(
        name: impl Into<String>,
        kind: RuleKind,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            kind,
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// `\bfrom:` → `to:`
    pub fn field_rename(from: &str, to: &str) -> Result<Self> {
        let pattern = format!(r"\b{}:", regex::escape(from));
        Self::new(
            format!("rename-{}", from),
            RuleKind::FieldRename,
            &pattern,
            format!("{}:", to),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// 回傳替換後的文字與命中次數
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut count = 0;
        let rewritten = self.pattern.replace_all(content, |caps: &Captures| {
            count += 1;
            let mut expanded = String::new();
            caps.expand(&self.replacement, &mut expanded);
            expanded
        });
        (rewritten.into_owned(), count)
    }
}

/// 預設規則集。順序不可調換：結構合併必須在無條件改名之前，
/// 去重必須在最後。
pub fn default_rules() -> Result<Vec<SubstitutionRule>> {
    let mut rules = Vec::with_capacity(FIELD_RENAMES.len() + 2);

    rules.push(SubstitutionRule::new(
        "structural-merge",
        RuleKind::StructuralMerge,
        STRUCTURAL_MERGE_PATTERN,
        STRUCTURAL_MERGE_REPLACEMENT,
    )?);

    for (from, to) in FIELD_RENAMES {
        rules.push(SubstitutionRule::field_rename(from, to)?);
    }

    rules.push(SubstitutionRule::new(
        "collapse-duplicate-score",
        RuleKind::DuplicateCollapse,
        DUPLICATE_SCORE_PATTERN,
        DUPLICATE_SCORE_REPLACEMENT,
    )?);

    Ok(rules)
}
