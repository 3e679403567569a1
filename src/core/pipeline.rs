use crate::core::rules;
use crate::core::{ConfigProvider, Pipeline, RuleOutcome, ScrubReport, ScrubResult, Storage};
use crate::utils::error::{Result, ScrubError};

pub struct ProjectScrubPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ProjectScrubPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ProjectScrubPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let path = self.config.project_file();
        tracing::debug!("Reading project file: {}", path);

        let data = self.storage.read_file(path).await?;
        let text = String::from_utf8(data).map_err(|e| ScrubError::ProcessingError {
            message: format!("Project file is not valid UTF-8: {}", e),
        })?;

        tracing::debug!("Read {} bytes", text.len());
        Ok(text)
    }

    async fn transform(&self, text: String) -> Result<ScrubResult> {
        let bytes_before = text.len();
        let mut buffer = text;
        let mut outcomes = Vec::new();

        // 依序套用規則，後面的規則看到的是刪完之後的文字
        for rule in self.config.rules() {
            let re = rules::compile(rule)?;
            let before = buffer.len();
            let matches = re.find_iter(&buffer).count();

            if matches > 0 {
                buffer = re.replace_all(&buffer, "").into_owned();
                tracing::debug!(
                    "Rule '{}' removed {} occurrence(s), {} bytes",
                    rule.name,
                    matches,
                    before - buffer.len()
                );
            } else {
                // 沒匹配不是錯誤，只記錄在報告裡
                tracing::debug!("Rule '{}' matched nothing", rule.name);
            }

            outcomes.push(RuleOutcome {
                name: rule.name.clone(),
                matches,
                bytes_removed: before - buffer.len(),
            });
        }

        let total_matches = outcomes.iter().map(|o| o.matches).sum();
        let report = ScrubReport {
            file: self.config.project_file().to_string(),
            outcomes,
            total_matches,
            bytes_before,
            bytes_after: buffer.len(),
            changed: buffer.len() != bytes_before,
            written: false,
        };

        Ok(ScrubResult {
            scrubbed: buffer,
            report,
        })
    }

    async fn load(&self, result: ScrubResult) -> Result<ScrubReport> {
        let mut report = result.report;

        if self.config.dry_run() {
            tracing::info!("Dry run, skipping write of {}", report.file);
            return Ok(report);
        }

        // 原檔案就算沒變也照樣重寫，維持和舊行為一致的檔案系統效果
        self.storage
            .write_file(self.config.project_file(), result.scrubbed.as_bytes())
            .await?;
        report.written = true;

        tracing::debug!("Wrote {} bytes back to {}", report.bytes_after, report.file);
        Ok(report)
    }
}
