//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are the parents of the presentational components: they read shared
//! state, run fetches, and translate component callbacks into navigation.

pub mod about;
pub mod job;
pub mod jobs;
