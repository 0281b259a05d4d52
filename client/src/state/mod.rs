//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `jobs` holds fetched listings and application progress; `ui` holds view
//! preferences. Both are provided as `RwSignal` contexts by `App`.

pub mod jobs;
pub mod ui;
