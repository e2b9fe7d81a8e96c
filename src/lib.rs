//! Terminal maze game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_pacbomb::{core,input,term,types}` and hosts the
//! `tui-pacbomb` binary.

pub use tui_pacbomb_core as core;
pub use tui_pacbomb_input as input;
pub use tui_pacbomb_term as term;
pub use tui_pacbomb_types as types;
