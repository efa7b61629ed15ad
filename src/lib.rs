//! Lays out slide content trees, described with utility-class styling, into
//! positioned drawing primitives on a fixed 16:9 canvas.

pub mod config;
pub mod converters;
pub mod emitter;
pub mod errors;
pub mod layout;
pub mod models;
pub mod style;
pub mod wasm;

pub use config::DeckConfig;
pub use converters::deck::{convert_presentation, DeckAssembler};
pub use converters::markdown;
pub use errors::{DeckError, Result};
pub use models::{document::Document, slide::Presentation};

// features
#[cfg(feature = "diff")]
pub mod diff;
#[cfg(feature = "diff")]
pub use diff::comparer::ComparerBuilder;
