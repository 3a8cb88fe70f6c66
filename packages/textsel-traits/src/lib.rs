//! Shared types and traits for textsel
//!
//! Everything a selection engine needs from its host lives here: `kurbo` geometry,
//! styled text snapshots, and the two collaborator traits a host implements
//! ([`TextLayoutResult`] and [`LayoutCoordinates`]).

pub mod coordinates;
pub mod layout;
pub mod text;

pub use coordinates::{FixedCoordinates, LayoutCoordinates};
pub use kurbo::{Point, Rect, Size, Vec2};
pub use layout::{ResolvedTextDirection, TextLayoutResult};
pub use text::{AnnotatedString, SpanStyle, StyleRange, TextRange};
