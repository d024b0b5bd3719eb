/// 一個待修正的原始檔：相對檔名與完整內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// 單一規則在一次改寫中命中的次數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct RewriteResult {
    pub name: String,
    pub content: String,
    pub hits: Vec<RuleHit>,
    pub changed: bool,
}

impl RewriteResult {
    pub fn substitutions(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Fixed {
        name: String,
        substitutions: usize,
        changed: bool,
        written: bool,
    },
    Missing {
        name: String,
    },
}

impl FileOutcome {
    pub fn name(&self) -> &str {
        match self {
            FileOutcome::Fixed { name, .. } | FileOutcome::Missing { name } => name,
        }
    }
}

/// 整次執行的結果，依處理順序排列
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Fixed { .. }))
            .count()
    }

    pub fn changed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Fixed { changed: true, .. }))
            .count()
    }

    pub fn missing(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Missing { .. }))
            .map(FileOutcome::name)
            .collect()
    }
}
