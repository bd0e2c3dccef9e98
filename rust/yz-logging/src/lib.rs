//! yz-logging: NDJSON score events.
//!
//! Append-only logs, one JSON object per line, so a crashed writer loses at most
//! its last partial line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// Identifies the scoring rules that produced an event.
pub const RULESET_ID: &str = "yahtzee_sum_straights_v1";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Minimal log schema versioning fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfoV1 {
    pub event_schema_version: u32,
    pub ruleset_id: String,
}

impl Default for VersionInfoV1 {
    fn default() -> Self {
        Self {
            event_schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: RULESET_ID.to_string(),
        }
    }
}

/// One scored (or rejected) roll.
///
/// `dice` holds the raw input, so rejected rolls of the wrong length or with
/// out-of-range faces are logged as given. `error` is set iff validation failed,
/// in which case `score` is 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub dice: Vec<i32>,
    pub category: String,
    pub score: u32,
    pub error: Option<String>,
}

impl ScoreEventV1 {
    pub fn new(dice: &[i32], category: &str, score: u32, error: Option<String>) -> Self {
        Self {
            event: "score".to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            dice: dice.to_vec(),
            category: category.to_string(),
            score,
            error,
        }
    }
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("ndjson io error: {0}")]
    Io(#[from] io::Error),
    #[error("ndjson encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every complete, parseable line; blank and malformed lines are skipped.
pub fn read_ndjson_lenient(path: impl AsRef<Path>) -> Result<Vec<Value>, NdjsonError> {
    let s = std::fs::read_to_string(path)?;
    Ok(s.lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect())
}
