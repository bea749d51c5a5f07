//! Guided joint-account application wizard.
//!
//! [`wizard`] is the UI-free engine (step sequencing, progress and the
//! validation gate). [`application`] hosts it in a vim-flavoured terminal UI.

pub mod application;
pub mod error;
pub mod event;
pub mod ui;
pub mod vim;
pub mod wizard;
