//! Reusable job board components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props. They never read shared
//! state from context and never perform I/O; user actions are reported
//! through `Callback` props owned by the calling page.

pub mod job_detail;
pub mod job_highlight_card;
pub mod job_highlight_grid;
pub mod job_list_screen;
pub mod skill_badge;
