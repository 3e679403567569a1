use crate::domain::model::{DeletionRule, ScrubReport, ScrubResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project_file(&self) -> &str;
    fn rules(&self) -> &[DeletionRule];
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, text: String) -> Result<ScrubResult>;
    async fn load(&self, result: ScrubResult) -> Result<ScrubReport>;
}
