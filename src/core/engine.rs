use crate::core::draw::check_preconditions;
use crate::domain::model::DrawOutcome;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::core::pipeline::DrawPipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: DrawOutcome,
    pub output_path: Option<String>,
}

pub struct DrawEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DrawEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🎲 Starting draw");

        tracing::info!("📥 Loading participants...");
        let participants = self.pipeline.extract().await?;
        tracing::info!("Loaded {} participants", participants.len());

        tracing::info!("🔀 Drawing winners...");
        let outcome = self.pipeline.transform(participants).await?;
        tracing::info!(
            "Drew {} winners ({} / {} / {})",
            outcome.result.winner_count(),
            outcome.result.tier1.len(),
            outcome.result.tier2.len(),
            outcome.result.tier3.len()
        );

        let output_path = self.pipeline.load(&outcome).await?;
        if let Some(path) = &output_path {
            tracing::info!("📁 Result exported to: {}", path);
        }

        Ok(RunSummary {
            outcome,
            output_path,
        })
    }
}

impl<S: Storage, C: ConfigProvider> DrawEngine<DrawPipeline<S, C>> {
    /// Loads participants and checks the bounds without building a generator.
    /// Returns the participant count.
    pub async fn dry_run(&self) -> Result<usize> {
        tracing::info!("🔍 DRY RUN MODE - no draw will be made");
        let participants = self.pipeline.extract().await?;
        check_preconditions(&self.pipeline.config().draw_config(), participants.len())?;
        tracing::info!(
            "✅ {} participants loaded, tier bounds are valid",
            participants.len()
        );
        Ok(participants.len())
    }
}
