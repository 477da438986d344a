use crate::domain::model::{DrawConfig, DrawOutcome, ParticipantSet};
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
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn draw_config(&self) -> DrawConfig;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ParticipantSet>;
    async fn transform(&self, participants: ParticipantSet) -> Result<DrawOutcome>;
    async fn load(&self, outcome: &DrawOutcome) -> Result<Option<String>>;
}
