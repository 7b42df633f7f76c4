//! Page renderer.
//!
//! Rendering is split in two: [`plan`] turns the loaded projects into an
//! ordered list of [`Instruction`]s, and [`Page`] streams each instruction as
//! HTML through an [`HtmlWriter`]. The plan is a 1:1 projection of the input:
//! no sorting, filtering or deduplication.

mod page;
mod writer;

pub use page::Page;
pub use writer::HtmlWriter;

use crate::project::Project;

/// One semantic block of the page, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// `<head>` metadata, title and assets.
    Head,
    /// Body open plus the logo/heading navigation.
    Header,
    /// Opens the project list.
    MainOpen,
    /// One project entry.
    Entry(&'a Project),
    /// Closes the project list.
    MainClose,
    /// "No Projects Found" block, used instead of the list when empty.
    Fallback,
    /// Footer links, copyright and body close.
    Footer,
}

/// Plans the page for `projects`.
pub fn plan(projects: &[Project]) -> Vec<Instruction<'_>> {
    let mut out = Vec::with_capacity(projects.len() + 5);
    out.push(Instruction::Head);
    out.push(Instruction::Header);
    if projects.is_empty() {
        out.push(Instruction::Fallback);
    } else {
        out.push(Instruction::MainOpen);
        out.extend(projects.iter().map(Instruction::Entry));
        out.push(Instruction::MainClose);
    }
    out.push(Instruction::Footer);
    out
}
