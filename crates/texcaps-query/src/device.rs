use std::fmt;

use texcaps_catalog::{Feature, FormatCatalog, FormatDescriptor, SampleKind, TextureFormat};

use crate::report::{CapabilityReport, StorageReport};
use crate::structural;
use crate::{tiers, FeatureSet, FormatQuery, StorageAccess, TextureDimension};

/// Capability questions resolved against an actual feature set.
///
/// Every capability is `false` for a format whose required feature is not enabled.
pub struct DeviceQuery<'a, F: FeatureSet + ?Sized> {
    formats: FormatQuery<'a>,
    features: &'a F,
}

impl<F: FeatureSet + ?Sized> Clone for DeviceQuery<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FeatureSet + ?Sized> Copy for DeviceQuery<'_, F> {}

impl<F: FeatureSet + ?Sized> fmt::Debug for DeviceQuery<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<_> = Feature::ALL
            .iter()
            .filter(|&&feature| self.has(feature))
            .map(|feature| feature.as_str())
            .collect();
        f.debug_struct("DeviceQuery")
            .field("features", &enabled)
            .field("compatibility", &self.features.is_compatibility_mode())
            .finish_non_exhaustive()
    }
}

impl<'a, F: FeatureSet + ?Sized> DeviceQuery<'a, F> {
    pub fn new(catalog: &'a FormatCatalog, features: &'a F) -> Self {
        Self {
            formats: FormatQuery::new(catalog),
            features,
        }
    }

    /// The feature-independent queries over the same catalog.
    pub fn structural(&self) -> FormatQuery<'a> {
        self.formats
    }

    fn has(&self, feature: Feature) -> bool {
        self.features.has_feature(feature)
    }

    fn compat(&self) -> bool {
        self.features.is_compatibility_mode()
    }

    fn enabled_descriptor(&self, format: TextureFormat) -> Option<&'a FormatDescriptor> {
        let desc = self.formats.descriptor(format);
        desc.required_feature
            .map_or(true, |feature| self.has(feature))
            .then_some(desc)
    }

    /// `Some(enabled)` for feature-gated render targets, `None` otherwise.
    fn render_gate(&self, desc: &FormatDescriptor) -> Option<bool> {
        desc.gated_render.map(|gated| self.has(gated.feature))
    }

    pub fn is_format_enabled(&self, format: TextureFormat) -> bool {
        self.enabled_descriptor(format).is_some()
    }

    pub fn is_render_attachment(&self, format: TextureFormat) -> bool {
        let Some(desc) = self.enabled_descriptor(format) else {
            return false;
        };
        self.render_gate(desc)
            .unwrap_or_else(|| desc.is_depth_or_stencil() || desc.color_render.is_some())
    }

    pub fn is_multisampled(&self, format: TextureFormat) -> bool {
        let Some(desc) = self.enabled_descriptor(format) else {
            return false;
        };
        if self.compat() && tiers::COMPAT_NO_MULTISAMPLE.contains(&format) {
            return false;
        }
        self.render_gate(desc).unwrap_or(desc.multisample)
    }

    pub fn is_resolvable(&self, format: TextureFormat) -> bool {
        if !self.is_multisampled(format) || self.formats.is_sint_or_uint_format(format) {
            return false;
        }
        let desc = self.formats.descriptor(format);
        self.render_gate(desc)
            .unwrap_or_else(|| desc.color_render.is_some_and(|info| info.resolvable))
    }

    pub fn is_blendable(&self, format: TextureFormat) -> bool {
        let Some(desc) = self.enabled_descriptor(format) else {
            return false;
        };
        if let Some(enabled) = self.render_gate(desc) {
            return enabled;
        }
        match desc.color_render {
            Some(info) if info.blendable => true,
            Some(_) => tiers::FLOAT32.contains(&format) && self.has(Feature::Float32Blendable),
            None => false,
        }
    }

    pub fn is_filterable(&self, format: TextureFormat) -> bool {
        let Some(desc) = self.enabled_descriptor(format) else {
            return false;
        };
        match desc.color().map(|color| color.sample_kind) {
            Some(SampleKind::Float) => true,
            Some(SampleKind::UnfilterableFloat) => self.has(Feature::Float32Filterable),
            _ => false,
        }
    }

    pub fn is_storage_usable(&self, format: TextureFormat, access: StorageAccess) -> bool {
        let Some(color) = self.enabled_descriptor(format).and_then(FormatDescriptor::color) else {
            return false;
        };

        if format == TextureFormat::Bgra8Unorm {
            return access != StorageAccess::ReadOnly && self.has(Feature::Bgra8UnormStorage);
        }
        if self.compat() && tiers::COMPAT_NO_STORAGE.contains(&format) {
            return false;
        }

        match access {
            StorageAccess::ReadOnly | StorageAccess::WriteOnly => {
                color.storage
                    || (self.has(Feature::TextureFormatsTier1)
                        && tiers::TIER1_STORAGE.contains(&format))
            }
            StorageAccess::ReadWrite => {
                color.read_write_storage
                    || (self.has(Feature::TextureFormatsTier2)
                        && tiers::TIER2_READ_WRITE_STORAGE.contains(&format))
            }
        }
    }

    /// Whether a texture of format `a` may be viewed as `b`.
    ///
    /// Outside compatibility mode a format and its sRGB counterpart are interchangeable.
    pub fn formats_are_view_compatible(&self, a: TextureFormat, b: TextureFormat) -> bool {
        if a == b {
            return true;
        }
        if self.compat() {
            return false;
        }
        let base_a = self.formats.descriptor(a).base_format;
        base_a.is_some() && base_a == self.formats.descriptor(b).base_format
    }

    pub fn dimension_compatible(&self, dimension: TextureDimension, format: TextureFormat) -> bool {
        let desc = self.formats.descriptor(format);
        structural::dimension_compatible(
            desc,
            dimension,
            self.has(Feature::TextureCompressionBcSliced3d),
            self.has(Feature::TextureCompressionAstcSliced3d),
        )
    }

    /// `formats` without those whose required feature is missing, order preserved.
    pub fn enabled_formats(
        &self,
        formats: impl IntoIterator<Item = TextureFormat>,
    ) -> Vec<TextureFormat> {
        formats
            .into_iter()
            .filter(|&format| self.is_format_enabled(format))
            .collect()
    }

    pub fn report(&self, format: TextureFormat) -> CapabilityReport {
        let desc = self.formats.descriptor(format);
        CapabilityReport {
            format,
            family: desc.family,
            required_feature: desc.required_feature,
            enabled: self.is_format_enabled(format),
            render_attachment: self.is_render_attachment(format),
            multisample: self.is_multisampled(format),
            resolve: self.is_resolvable(format),
            blend: self.is_blendable(format),
            filter: self.is_filterable(format),
            storage: StorageReport {
                read_only: self.is_storage_usable(format, StorageAccess::ReadOnly),
                write_only: self.is_storage_usable(format, StorageAccess::WriteOnly),
                read_write: self.is_storage_usable(format, StorageAccess::ReadWrite),
            },
            dimensions: TextureDimension::ALL
                .iter()
                .copied()
                .filter(|&dimension| self.dimension_compatible(dimension, format))
                .collect(),
            view_formats: self
                .formats
                .catalog()
                .iter()
                .filter(|other| other.format != format && other.family == desc.family)
                .map(|other| other.format)
                .filter(|&other| self.formats_are_view_compatible(format, other))
                .collect(),
        }
    }
}
