// NOTE: folio Architecture Rationale
//
// Why a static catalog (not a database or remote source)?
// - The portfolio content changes a few times a year, by hand
// - Embedding the TOML document in the binary makes the tool a single file
// - An external catalog can still be supplied for previewing edits
//
// Why an unguarded selection model?
// - Every view transition is legal, so guards would only add dead code
// - The view enum is closed; the router matches it exhaustively, which
//   turns "unknown view" into a compile error instead of a runtime check
//
// Why are the three overlay slots independent?
// - The original UI never enforced mutual exclusion between them, and the
//   image preview legitimately opens on top of the project detail surface
// - Stacking order (image over certificate over project) is the only
//   tie-break the presenter needs

pub mod catalog;
pub mod domain;
pub mod error;
pub mod selection;

pub use catalog::Catalog;
pub use domain::*;
pub use error::{Error, Result};
pub use selection::{OverlayKind, SelectionState, ViewId};
