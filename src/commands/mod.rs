//! CLI commands for favpath

pub mod dispatch;
pub mod edges;
pub mod format;
pub mod helpers;
pub mod path;
pub mod show;
