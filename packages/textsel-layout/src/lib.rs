//! Reference text layout for textsel
//!
//! [`GridTextLayout`] lays text out on a fixed advance grid while still running the
//! real Unicode Bidirectional Algorithm, so it answers every
//! [`TextLayoutResult`](textsel_traits::TextLayoutResult) query the way a shaped
//! layout would for monospace text:
//! - one line per paragraph, zero width newlines
//! - visual run reordering through `unicode-bidi`
//! - word boundaries through `unicode-segmentation`
//!
//! It exists for hosts without a shaping engine and for tests that need exact,
//! predictable glyph geometry.

mod config;
mod error;
mod grid;
mod paragraph;
mod word;

pub use config::{BaseDirection, LayoutConfig};
pub use error::LayoutError;
pub use grid::GridTextLayout;
pub use word::word_boundary;
