//! JSON-lines dump of the automaton
//!
//! One object per emitted state:
//!
//! ```text
//! {"id":"…32 hex…","grid":["0110","0000",…],"edges":{"rotate":"…","down":"end"}}
//! ```
//!
//! Out-of-bounds actions are absent from `edges`; game-over edges are the
//! string `"end"`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{Edge, StateRecord};

/// Edge target used for game over
pub const END_TARGET: &str = "end";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub id: String,
    /// Rendered rows, top first, as strings of `0`/`1`
    pub grid: Vec<String>,
    pub edges: BTreeMap<String, String>,
}

impl From<&StateRecord> for GraphRecord {
    fn from(record: &StateRecord) -> Self {
        let grid = record
            .grid
            .to_cells()
            .iter()
            .map(|row| row.iter().map(|&c| if c == 1 { '1' } else { '0' }).collect())
            .collect();

        let edges = record
            .edges
            .iter()
            .map(|(action, edge)| {
                let target = match edge {
                    Edge::State(id) => id.to_string(),
                    Edge::GameOver => END_TARGET.to_string(),
                };
                (action.as_str().to_string(), target)
            })
            .collect();

        Self {
            id: record.id.to_string(),
            grid,
            edges,
        }
    }
}

/// Buffered JSON-lines writer
pub struct GraphWriter {
    file: BufWriter<File>,
    buf: Vec<u8>,
}

impl GraphWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating graph dump {}", path.display()))?;
        Ok(Self {
            file: BufWriter::new(file),
            buf: Vec::with_capacity(1024),
        })
    }

    pub fn write(&mut self, record: &StateRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &GraphRecord::from(record))?;
        self.buf.push(b'\n');
        self.file.write_all(&self.buf)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}
