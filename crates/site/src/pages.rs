//! HTML documents
//!
//! Plain HTML with no styling beyond cell colors: occupied cells are black,
//! empty cells gray. An action that is out of bounds still shows its label,
//! as an `<a>` without `href`.

use std::fmt::Write;

use crate::core::{RenderedGrid, StateId};
use crate::engine::{Edge, EdgeMap};
use crate::types::Action;

const TITLE: &str = "Tetris DFA on pure HTML";

/// Link target of the end page, relative to a state page
pub const END_FROM_STATE: &str = "../end.html";

fn header(out: &mut String) {
    out.push_str("<!DOCTYPE html>\n<html>\n<body>\n\n");
    let _ = write!(out, "<h1>{}</h1>\n\n", TITLE);
}

fn footer(out: &mut String) {
    out.push_str("\n</body>\n</html>");
}

fn grid_table(out: &mut String, grid: &RenderedGrid) {
    out.push_str("<table>\n");
    for row in 0..grid.height() {
        out.push_str("\t<tr>\n");
        for col in 0..grid.width() {
            let color = if grid.get(row, col) { "black" } else { "gray" };
            let _ = writeln!(out, "\t\t<td bgcolor=\"{}\"><pre>    </pre></td>", color);
        }
        out.push_str("\t</tr>\n");
    }
    out.push_str("</table>\n");
}

fn action_link(out: &mut String, edges: &EdgeMap, action: Action) {
    match edges.get(action) {
        Some(Edge::State(id)) => {
            let _ = writeln!(out, "<a href=\"{}\">{}</a>", id.page_name(), action.label());
        }
        Some(Edge::GameOver) => {
            let _ = writeln!(out, "<a href=\"{}\">{}</a>", END_FROM_STATE, action.label());
        }
        None => {
            let _ = writeln!(out, "<a>{}</a>", action.label());
        }
    }
}

/// Page for one state; `initial` is the Restart target
pub fn state_page(grid: &RenderedGrid, edges: &EdgeMap, initial: StateId) -> String {
    let mut out = String::with_capacity(256 + grid.height() * grid.width() * 48);
    header(&mut out);
    grid_table(&mut out, grid);
    out.push('\n');

    action_link(&mut out, edges, Action::Rotate);
    out.push_str("<br>\n");
    action_link(&mut out, edges, Action::Left);
    action_link(&mut out, edges, Action::Right);
    out.push_str("<br>\n");
    action_link(&mut out, edges, Action::Down);
    out.push_str("<br><br>\n");
    let _ = writeln!(out, "<a href=\"{}\">Restart</a>", initial.page_name());

    footer(&mut out);
    out
}

/// Entry page at the output root
pub fn index_page(initial: StateId) -> String {
    let mut out = String::new();
    header(&mut out);
    let _ = writeln!(out, "<a href=\"state/{}\">Start</a>", initial.page_name());
    footer(&mut out);
    out
}

/// The single end-of-game page at the output root
pub fn end_page(initial: StateId) -> String {
    let mut out = String::new();
    header(&mut out);
    out.push_str("<h2>End of game</h2>\n\n");
    let _ = writeln!(out, "<a href=\"state/{}\">Restart</a>", initial.page_name());
    footer(&mut out);
    out
}
