use crate::domain::model::{Identifier, ParticipantSet, SkippedLine};
use crate::domain::ports::Storage;
use crate::utils::error::{DrawError, Result};
use std::io::ErrorKind;

/// Parses one UID per line. Blank lines are ignored, malformed lines are
/// skipped with a warning and do not abort the load.
pub fn load_from_str(content: &str) -> Result<ParticipantSet> {
    let mut ids = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in split_lines(content).enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_identifier(trimmed) {
            Some(uid) => ids.push(uid),
            None => {
                tracing::warn!("⚠️ Line {} is not a valid UID, skipped: {}", line_no, trimmed);
                skipped.push(SkippedLine {
                    line_no,
                    content: trimmed.to_string(),
                });
            }
        }
    }

    if ids.is_empty() {
        return Err(DrawError::EmptyParticipants);
    }

    tracing::debug!(
        "Loaded {} participants ({} lines skipped)",
        ids.len(),
        skipped.len()
    );
    Ok(ParticipantSet::new(ids, skipped))
}

/// Breaks on `\n`, `\r\n` and a lone `\r`, like a text-mode read.
/// `\r\n` counts as a single break.
fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Reads the participant file through `storage`.
pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<ParticipantSet> {
    let bytes = storage.read_file(path).await.map_err(|e| match e {
        DrawError::IoError(io) if io.kind() == ErrorKind::NotFound => DrawError::SourceNotFound {
            path: path.to_string(),
        },
        other => other,
    })?;

    let content = std::str::from_utf8(&bytes).map_err(|_| DrawError::InvalidEncoding {
        path: path.to_string(),
    })?;
    // 容許 Windows 記事本存檔時加上的 BOM
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    load_from_str(content)
}

/// Integer syntax: optional sign, decimal digits, single `_` between digits.
/// Out-of-range values are rejected like any other malformed line.
pub fn parse_identifier(raw: &str) -> Option<Identifier> {
    let (sign, digits) = match raw.as_bytes().first()? {
        b'+' | b'-' => raw.split_at(1),
        _ => ("", raw),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    if digits.contains("__") {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }

    let cleaned: String = sign.chars().chain(digits.chars().filter(|c| *c != '_')).collect();
    cleaned.parse::<Identifier>().ok()
}
