use crate::core::report::{export, ExportFormat};
use crate::core::{draw, loader};
use crate::domain::model::{DrawOutcome, ParticipantSet};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct DrawPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DrawPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DrawPipeline<S, C> {
    async fn extract(&self) -> Result<ParticipantSet> {
        tracing::debug!("Reading participants from: {}", self.config.input_path());
        let participants = loader::load(&self.storage, self.config.input_path()).await?;

        if !participants.skipped().is_empty() {
            tracing::warn!(
                "⚠️ {} malformed lines were skipped",
                participants.skipped().len()
            );
        }
        Ok(participants)
    }

    async fn transform(&self, participants: ParticipantSet) -> Result<DrawOutcome> {
        let config = self.config.draw_config();
        let result = draw::draw(&participants, &config)?;

        Ok(DrawOutcome {
            result,
            skipped: participants.skipped().to_vec(),
        })
    }

    async fn load(&self, outcome: &DrawOutcome) -> Result<Option<String>> {
        let Some(path) = self.config.output_path() else {
            tracing::debug!("No output path configured, skipping export");
            return Ok(None);
        };

        let format = ExportFormat::from_path(path);
        let data = export(outcome, format)?;

        tracing::debug!("Writing {:?} export ({} bytes) to {}", format, data.len(), path);
        self.storage.write_file(path, &data).await?;
        Ok(Some(path.to_string()))
    }
}
