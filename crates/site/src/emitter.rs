//! Page emitter - writes the explorer's records to disk
//!
//! Layout under the output directory:
//!
//! ```text
//! index.html            entry page, links to the initial state
//! end.html              the single game-over page
//! state/hash<id>.html   one page per reachable state
//! ```
//!
//! The output directory is wiped and recreated before a run; there is no
//! incremental mode.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::core::{GameState, StateId};
use crate::engine::{CancelToken, ExploreStats, Explorer, RecordSink, StateRecord};
use crate::graph::GraphWriter;
use crate::pages;

/// Remove `out_dir` if present and recreate it with an empty `state/`
pub fn prepare_output_dir(out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)
            .with_context(|| format!("removing {}", out_dir.display()))?;
    }
    let state_dir = out_dir.join("state");
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("creating {}", state_dir.display()))?;
    Ok(())
}

pub struct PageEmitter {
    out_dir: PathBuf,
    initial: StateId,
    graph: Option<GraphWriter>,
    pages: usize,
}

impl PageEmitter {
    /// Prepare the output directory and open the graph dump if configured
    pub fn create(config: &SiteConfig, initial: StateId) -> Result<Self> {
        prepare_output_dir(&config.out_dir)?;
        let graph = match &config.graph_path {
            Some(path) => Some(GraphWriter::create(path)?),
            None => None,
        };
        Ok(Self {
            out_dir: config.out_dir.clone(),
            initial,
            graph,
            pages: 0,
        })
    }

    /// Write the entry and end pages and flush the graph dump
    pub fn finish(self) -> Result<usize> {
        write_page(&self.out_dir.join("index.html"), &pages::index_page(self.initial))?;
        write_page(&self.out_dir.join("end.html"), &pages::end_page(self.initial))?;
        if let Some(graph) = self.graph {
            graph.finish()?;
        }
        Ok(self.pages)
    }
}

impl RecordSink for PageEmitter {
    type Error = anyhow::Error;

    fn record(&mut self, record: &StateRecord) -> Result<()> {
        let html = pages::state_page(&record.grid, &record.edges, self.initial);
        let path = self.out_dir.join("state").join(record.id.page_name());
        write_page(&path, &html)?;
        if let Some(graph) = self.graph.as_mut() {
            graph.write(record)?;
        }
        self.pages += 1;
        Ok(())
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub initial: StateId,
    pub stats: ExploreStats,
    pub pages: usize,
}

/// Explore the configured game and write every page.
///
/// `on_progress` is called after each record. A cancelled run returns an
/// error and leaves a partial tree behind, which the next run wipes.
pub fn generate(
    config: &SiteConfig,
    cancel: CancelToken,
    mut on_progress: impl FnMut(&ExploreStats),
) -> Result<Summary> {
    config.validate()?;

    let selector = config.selector();
    let initial = GameState::initial(config.height, config.width, selector.as_ref())?;
    let initial_id = initial.id();

    eprintln!(
        "[Site] {}x{} field, {}, writing to {}",
        config.height,
        config.width,
        match config.piece {
            Some(kind) => format!("pinned piece {}", kind.as_str()),
            None => format!("seed {}", config.seed),
        },
        config.out_dir.display()
    );

    let mut emitter = PageEmitter::create(config, initial_id)?;
    let mut explorer = Explorer::new(initial, selector.as_ref()).with_cancel(cancel);

    while let Some(record) = explorer.next() {
        emitter.record(&record?)?;
        on_progress(&explorer.stats());
    }

    let stats = explorer.stats();
    let pages = emitter.finish()?;

    Ok(Summary {
        initial: initial_id,
        stats,
        pages,
    })
}
