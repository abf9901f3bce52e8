// Page geometry and type scale applied to every exported document.
// Values are tuned for single-page ATS resumes: narrow margins, one safe font.

pub mod page_setup;
pub mod typography;

pub use page_setup::{default_page_setup, FontFamily, PageSetup};
