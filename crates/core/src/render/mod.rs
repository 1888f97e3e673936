//! PDF rendering backend.
//!
//! Turns a composed block sequence into A4 pages using printpdf's
//! built-in Helvetica fonts, so no font assets ship with the service.

mod error;
mod pdf;

pub use error::RenderError;
pub use pdf::PdfRenderer;
