use serde::{Deserialize, Serialize};

/// 一條刪除規則：pattern 匹配到的內容整段移除（取代字串固定為空）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionRule {
    pub name: String,
    pub pattern: String,
}

impl DeletionRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// 單一規則的執行結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub name: String,
    pub matches: usize,
    pub bytes_removed: usize,
}

#[derive(Debug, Clone)]
pub struct ScrubResult {
    pub scrubbed: String,
    pub report: ScrubReport,
}

/// 整次執行的報告，可序列化成 JSON 供 --report 輸出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubReport {
    pub file: String,
    pub outcomes: Vec<RuleOutcome>,
    pub total_matches: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub changed: bool,
    pub written: bool,
}

impl ScrubReport {
    /// 有實際刪到內容的規則數
    pub fn rules_fired(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matches > 0).count()
    }
}
