use serde::Serialize;
use texcaps_catalog::{Feature, FormatFamily, TextureFormat};

use crate::TextureDimension;

/// Every device-gated capability of one format, as returned by `DeviceQuery::report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    pub format: TextureFormat,
    pub family: FormatFamily,
    pub required_feature: Option<Feature>,
    pub enabled: bool,
    pub render_attachment: bool,
    pub multisample: bool,
    pub resolve: bool,
    pub blend: bool,
    pub filter: bool,
    pub storage: StorageReport,
    pub dimensions: Vec<TextureDimension>,
    /// Other formats a texture of this format may be viewed as.
    pub view_formats: Vec<TextureFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageReport {
    pub read_only: bool,
    pub write_only: bool,
    pub read_write: bool,
}

impl CapabilityReport {
    /// `(label, value)` pairs for the boolean capabilities, in display order.
    pub fn flags(&self) -> [(&'static str, bool); 9] {
        [
            ("enabled", self.enabled),
            ("render-attachment", self.render_attachment),
            ("multisample", self.multisample),
            ("resolve", self.resolve),
            ("blend", self.blend),
            ("filter", self.filter),
            ("storage-read-only", self.storage.read_only),
            ("storage-write-only", self.storage.write_only),
            ("storage-read-write", self.storage.read_write),
        ]
    }
}
