//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the job board REST endpoints; record types come from the
//! shared `listings` crate.

pub mod api;
