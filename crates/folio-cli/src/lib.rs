// NOTE: folio UI Architecture
//
// Why one state struct owned by the event loop?
// - Exactly one actor (the keyboard, on the UI thread) ever mutates the
//   selection, so a single exclusively-owned struct is the whole story
// - Views receive shared references and stay pure; components own only
//   their scroll cursors (ListState), never domain state
//
// Why key routing instead of focus management?
// - An open overlay consumes every key before anything below it sees one,
//   which is the terminal analog of a modal backdrop swallowing clicks
// - Precedence: overlay, then the narrow-layout menu, then globals, then
//   the active view's component

mod args;
mod commands;
pub mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
