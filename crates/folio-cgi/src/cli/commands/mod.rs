//! CLI command handlers, one per file.

mod check;
mod list;
mod render;

pub use check::run_check;
pub use list::run_list;
pub use render::run_render;
