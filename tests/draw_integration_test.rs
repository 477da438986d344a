use anyhow::Result;
use lucky_draw::core::loader;
use lucky_draw::core::report::PublishedDraw;
use lucky_draw::{
    verify, DrawConfig, DrawEngine, DrawError, DrawPipeline, DrawSettings, LocalStorage, Tier,
    Verification,
};
use std::collections::HashSet;
use tempfile::TempDir;

fn settings(dir: &TempDir, input: &str, output: Option<&str>, draw: DrawConfig) -> DrawSettings {
    DrawSettings {
        input_path: dir.path().join(input).to_string_lossy().into_owned(),
        output_path: output.map(|o| dir.path().join(o).to_string_lossy().into_owned()),
        draw,
    }
}

/// 與原始公告腳本相同的參數：種子 20080405528491，5 / 10 / 25
#[tokio::test]
async fn test_end_to_end_draw_with_csv_export() -> Result<()> {
    let dir = TempDir::new()?;
    let uids: String = (1..=30).map(|i| format!("{}\n", i)).collect();
    tokio::fs::write(dir.path().join("uids.txt"), uids).await?;

    let config = DrawConfig::new(20_080_405_528_491, 5, 10, 25);
    let pipeline = DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", Some("out/winners.csv"), config),
    );
    let summary = DrawEngine::new(pipeline).run().await?;
    let result = &summary.outcome.result;

    assert_eq!(result.tier1, vec![18, 10, 24, 5, 8]);
    assert_eq!(result.tier2, vec![17, 25, 20, 23, 16]);
    assert_eq!(
        result.tier3,
        vec![1, 4, 21, 12, 28, 22, 13, 27, 14, 29, 19, 6, 3, 2, 7]
    );

    let csv = tokio::fs::read_to_string(dir.path().join("out/winners.csv")).await?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "uid,tier");
    assert_eq!(lines[1], "18,first");
    assert_eq!(lines[6], "17,second");
    assert_eq!(lines[25], "7,third");
    Ok(())
}

#[tokio::test]
async fn test_line_order_does_not_change_result() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("a.txt"), "10\n20\n30\n40\n50\n60\n70\n").await?;
    tokio::fs::write(dir.path().join("b.txt"), "70\n\n30\n50\n10\n60\n20\n40\n").await?;

    let config = DrawConfig::new(987_654_321, 2, 3, 5);
    let first = DrawEngine::new(DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "a.txt", None, config),
    ))
    .run()
    .await?;
    let second = DrawEngine::new(DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "b.txt", None, config),
    ))
    .run()
    .await?;

    assert_eq!(first.outcome.result, second.outcome.result);
    Ok(())
}

#[tokio::test]
async fn test_malformed_line_is_skipped_not_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("uids.txt"), "1\n2\nabc\n3\n4\n").await?;

    let storage = LocalStorage::current_dir();
    let path = dir.path().join("uids.txt");
    let participants = loader::load(&storage, path.to_str().unwrap()).await?;

    assert_eq!(participants.ids(), &[1, 2, 3, 4]);
    assert_eq!(participants.skipped().len(), 1);
    assert_eq!(participants.skipped()[0].line_no, 3);
    assert_eq!(participants.skipped()[0].content, "abc");
    Ok(())
}

#[tokio::test]
async fn test_missing_source_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "missing.txt", None, DrawConfig::new(1, 0, 0, 0)),
    );

    let err = DrawEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, DrawError::SourceNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_only_invalid_lines_is_empty_participants() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("uids.txt"), "x\n\ny\n").await?;

    let pipeline = DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", None, DrawConfig::new(1, 0, 0, 0)),
    );
    let err = DrawEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, DrawError::EmptyParticipants));
    Ok(())
}

#[tokio::test]
async fn test_failed_draw_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("uids.txt"), "1\n2\n3\n").await?;

    let pipeline = DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", Some("winners.csv"), DrawConfig::new(1, 1, 2, 4)),
    );
    let err = DrawEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, DrawError::InsufficientParticipants { .. }));
    assert!(!dir.path().join("winners.csv").exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_checks_bounds_without_drawing() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("uids.txt"), "1\n2\n3\n").await?;

    let ok = DrawEngine::new(DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", Some("w.csv"), DrawConfig::new(1, 1, 2, 3)),
    ));
    assert_eq!(ok.dry_run().await?, 3);
    assert!(!dir.path().join("w.csv").exists());

    let too_many = DrawEngine::new(DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", None, DrawConfig::new(1, 1, 2, 9)),
    ));
    assert!(too_many.dry_run().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_published_json_verifies() -> Result<()> {
    let dir = TempDir::new()?;
    let uids: String = (0..500).map(|i| format!("{}\n", 1_000_000 + i * 13)).collect();
    tokio::fs::write(dir.path().join("uids.txt"), uids).await?;

    let config = DrawConfig::new(-2024, 3, 8, 20);
    let pipeline = DrawPipeline::new(
        LocalStorage::current_dir(),
        settings(&dir, "uids.txt", Some("draw.json"), config),
    );
    let summary = DrawEngine::new(pipeline).run().await?;

    let published =
        PublishedDraw::from_json(&tokio::fs::read(dir.path().join("draw.json")).await?)?;
    assert_eq!(published.result, summary.outcome.result);

    let source: HashSet<i128> = (0..500).map(|i| 1_000_000 + i * 13).collect();
    let winners: HashSet<i128> = published.result.ranked().map(|(_, uid)| uid).collect();
    assert_eq!(winners.len(), 20);
    assert!(winners.is_subset(&source));

    let storage = LocalStorage::current_dir();
    let path = dir.path().join("uids.txt");
    let participants = loader::load(&storage, path.to_str().unwrap()).await?;
    assert_eq!(
        verify(&participants, &config, &published.result)?,
        Verification::Match
    );

    // 種子只取絕對值，2024 與 -2024 抽出同一組
    let mut same_magnitude = published.result.clone();
    same_magnitude.seed = 2024;
    assert_eq!(
        verify(&participants, &DrawConfig::new(2024, 3, 8, 20), &same_magnitude)?,
        Verification::Match
    );

    // 宣稱用 2025 抽出，但名單其實來自 -2024
    let mut relabelled = published.result.clone();
    relabelled.seed = 2025;
    assert_eq!(
        verify(&participants, &DrawConfig::new(2025, 3, 8, 20), &relabelled)?,
        Verification::WinnerMismatch {
            tier: Tier::First,
            rank: 0,
            expected: Some(1_004_186),
            found: Some(1_002_665),
        }
    );
    Ok(())
}
