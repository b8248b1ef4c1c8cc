//! Session input: every front end (CLI prompt, scripted session) produces
//! the same [`Action`]s.
//!
//! # Invariants
//! - Parsing is pure; actions carry no references to cube state.

pub mod action;

pub use action::{Action, ParseActionError};
