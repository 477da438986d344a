use crate::domain::model::{DrawOutcome, DrawResult, SkippedLine, Tier};
use crate::utils::error::{DrawError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `uid,tier` with a header row
    Csv,
    Json,
    /// `uid,tier` rows, no header
    Plain,
}

impl ExportFormat {
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => ExportFormat::Csv,
            Some("json") => ExportFormat::Json,
            _ => ExportFormat::Plain,
        }
    }
}

/// JSON document published after a draw; `verify-draw` reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedDraw {
    pub generated_at: DateTime<Utc>,
    pub result: DrawResult,
    #[serde(default)]
    pub skipped_lines: Vec<SkippedLine>,
}

impl PublishedDraw {
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

pub fn export(outcome: &DrawOutcome, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => {
            let doc = PublishedDraw {
                generated_at: Utc::now(),
                result: outcome.result.clone(),
                skipped_lines: outcome.skipped.clone(),
            };
            Ok(serde_json::to_vec_pretty(&doc)?)
        }
        ExportFormat::Csv | ExportFormat::Plain => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            if format == ExportFormat::Csv {
                writer.write_record(["uid", "tier"])?;
            }
            for (tier, uid) in outcome.result.ranked() {
                writer.write_record([uid.to_string(), tier.label().to_string()])?;
            }
            writer.into_inner().map_err(|e| {
                DrawError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
            })
        }
    }
}

/// Plain-text summary for the console.
pub fn render_text(result: &DrawResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Draw result ===");
    let _ = writeln!(out, "Seed: {}", result.seed);
    let _ = writeln!(
        out,
        "Participants: {}, winners: {} (A={}, B={}, C={})",
        result.total_participants,
        result.winner_count(),
        result.a,
        result.b,
        result.c
    );

    for tier in Tier::ALL {
        let winners = result.tier(tier);
        let _ = writeln!(out);
        let _ = writeln!(out, "{} prize ({}):", capitalize(tier.label()), winners.len());
        for (rank, uid) in winners.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. UID: {}", rank + 1, uid);
        }
    }
    out
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
