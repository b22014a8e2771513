//! Static site generator (default binary).
//!
//! Reads the field size and run options from the environment, wipes the
//! output directory, and writes one page per reachable game state.

use anyhow::Result;

use html_tetris::engine::CancelToken;
use html_tetris::site::{generate, SiteConfig};
use html_tetris::term::ProgressLine;

fn main() -> Result<()> {
    let config = SiteConfig::from_env();
    let mut progress = ProgressLine::new(!config.quiet);

    let summary = generate(&config, CancelToken::new(), |stats| {
        let _ = progress.update(stats);
    })?;

    let _ = progress.finish(&summary.stats);
    eprintln!(
        "[Explorer] {} states, {} transitions, {} game-over edges",
        summary.stats.emitted, summary.stats.state_edges, summary.stats.game_over_edges
    );
    println!(
        "Wrote {} state pages to {} (start: state/{})",
        summary.pages,
        config.out_dir.display(),
        summary.initial.page_name()
    );
    Ok(())
}
