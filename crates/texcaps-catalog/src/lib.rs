//! Static catalog of WebGPU texture formats and their capabilities.
//!
//! The catalog is assembled from six family tables (regular, sized depth-stencil, unsized
//! depth-stencil, BC, ETC2/EAC, ASTC). Each table entry is a partial [`FormatEntry`] merged over
//! the family defaults, which are in turn merged over global defaults, and then resolved into a
//! [`FormatDescriptor`]. [`FormatCatalog::build`] checks that every [`TextureFormat`] is declared
//! exactly once.
//!
//! Device-dependent questions (is this format renderable with these features enabled?) live in
//! `texcaps-query`; this crate only describes what each format is.

#![forbid(unsafe_code)]

#[macro_use]
mod wire;

mod catalog;
mod descriptor;
mod error;
mod format;
pub mod tables;

#[doc(hidden)]
pub use serde as __serde;

pub use catalog::{FormatCatalog, FormatGroup};
pub use descriptor::{
    AspectInfo, Aspects, BlockInfo, ColorRenderInfo, FormatDescriptor, FormatEntry, FormatFamily,
    GatedRender, SampleKind,
};
pub use error::{CatalogError, Result};
pub use format::{Feature, TextureFormat};
