//! WebGPU texture format capabilities.
//!
//! Re-exports the format catalog (`texcaps-catalog`) and the capability queries built on it
//! (`texcaps-query`) under one crate.
//!
//! ```
//! use texcaps::{DeviceFeatures, DeviceQuery, Feature, FormatCatalog, TextureFormat};
//!
//! let catalog = FormatCatalog::build()?;
//! let features = DeviceFeatures::new().with(Feature::TextureFormatsTier1);
//! let query = DeviceQuery::new(&catalog, &features);
//! assert!(query.is_render_attachment(TextureFormat::R16Unorm));
//! # Ok::<(), texcaps::CatalogError>(())
//! ```

#![forbid(unsafe_code)]

pub use texcaps_catalog::{
    tables, AspectInfo, Aspects, BlockInfo, CatalogError, ColorRenderInfo, Feature, FormatCatalog,
    FormatDescriptor, FormatEntry, FormatFamily, FormatGroup, GatedRender, SampleKind,
    TextureFormat,
};
pub use texcaps_query::{
    tiers, CapabilityReport, DeviceFeatures, DeviceQuery, FeatureFlags, FeatureSet, FormatQuery,
    QueryError, StorageAccess, StorageReport, TextureAspect, TextureDimension,
};
#[cfg(feature = "wgpu")]
pub use texcaps_query::wgpu_feature;
