//! asciicast v3 reader.
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v3/
//!
//! A recording is newline-delimited JSON: a header object, then one
//! `[interval, code, data]` array per event. Lines starting with `#` are
//! comments. Output events carry the raw chunks a console view would have
//! received, so that is all replay needs; the rest is read and kept as-is.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// The recording's header line. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub version: u8,
    #[serde(default)]
    pub term: Option<TermInfo>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermInfo {
    pub cols: Option<u32>,
    pub rows: Option<u32>,
}

/// Event kind, stored as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "o")]
    Output,
    #[serde(rename = "i")]
    Input,
    #[serde(rename = "m")]
    Marker,
    #[serde(rename = "r")]
    Resize,
    #[serde(rename = "x")]
    Exit,
}

/// One event line.
///
/// `time` is the interval since the previous event, not an absolute offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEvent", into = "RawEvent")]
pub struct Event {
    pub time: f64,
    pub event_type: EventType,
    pub data: String,
}

/// Wire shape of an event: a three-element JSON array.
#[derive(Serialize, Deserialize)]
struct RawEvent(f64, EventType, String);

impl From<RawEvent> for Event {
    fn from(RawEvent(time, event_type, data): RawEvent) -> Self {
        Self {
            time,
            event_type,
            data,
        }
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        RawEvent(event.time, event.event_type, event.data)
    }
}

impl Event {
    pub fn new(time: f64, event_type: EventType, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type,
            data: data.into(),
        }
    }

    pub fn is_output(&self) -> bool {
        self.event_type == EventType::Output
    }

    pub fn from_json(line: &str) -> Result<Self> {
        serde_json::from_str(line).context("Expected an [interval, code, data] array")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode event")
    }
}

/// A parsed recording.
#[derive(Debug, Clone)]
pub struct AsciicastFile {
    pub header: Header,
    pub events: Vec<Event>,
}

impl AsciicastFile {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open recording {}", path.display()))?;
        Self::parse_reader(BufReader::new(file))
            .with_context(|| format!("Invalid recording {}", path.display()))
    }

    /// Read a recording line by line. Errors name the 1-based line number.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut header = None;
        let mut events = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.with_context(|| format!("Failed to read line {number}"))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if header.is_none() {
                let parsed: Header = serde_json::from_str(line)
                    .with_context(|| format!("Invalid header on line {number}"))?;
                ensure!(
                    parsed.version == 3,
                    "Unsupported asciicast version {}, only v3 is supported",
                    parsed.version
                );
                header = Some(parsed);
            } else {
                let event = Event::from_json(line)
                    .with_context(|| format!("Invalid event on line {number}"))?;
                events.push(event);
            }
        }

        let header = header.context("Recording is empty")?;
        tracing::debug!(events = events.len(), "parsed asciicast");
        Ok(Self { header, events })
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_reader(content.as_bytes())
    }

    pub fn output_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_output())
    }

    /// Sum of all intervals, in seconds.
    pub fn duration(&self) -> f64 {
        self.events.iter().map(|e| e.time).sum()
    }
}
