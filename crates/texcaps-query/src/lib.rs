//! Capability queries over the texture format catalog.
//!
//! [`FormatQuery`] answers structural questions that need only the catalog (is this a depth
//! format? which single-aspect format does `depth-only` of `depth24plus-stencil8` copy as? how
//! many bytes per sample does this attachment set need?). [`DeviceQuery`] adds a [`FeatureSet`] and
//! answers whether a format is actually usable for rendering, multisampling, resolving, blending,
//! filtering or storage on that device.
//!
//! Queries are pure and never panic on catalog data; questions that do not apply to a format
//! (the stencil aspect of a color format, the byte size of `depth24plus`) are [`QueryError`]s.

#![forbid(unsafe_code)]

mod aspect;
mod bytes_per_sample;
mod device;
mod error;
mod features;
mod report;
mod structural;
pub mod tiers;
mod usage;
#[cfg(feature = "wgpu")]
mod wgpu_features;

pub use device::DeviceQuery;
pub use error::{QueryError, Result};
pub use features::{DeviceFeatures, FeatureFlags, FeatureSet};
pub use report::{CapabilityReport, StorageReport};
pub use structural::FormatQuery;
pub use usage::{StorageAccess, TextureAspect, TextureDimension};
#[cfg(feature = "wgpu")]
pub use wgpu_features::wgpu_feature;
