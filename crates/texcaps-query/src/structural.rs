use std::collections::BTreeSet;

use texcaps_catalog::{
    Feature, FormatCatalog, FormatDescriptor, FormatFamily, SampleKind, TextureFormat,
};

use crate::{tiers, StorageAccess, TextureDimension};

/// Feature-independent questions about formats.
///
/// The `is_possibly_*` predicates answer "could this ever be true on some device?", which is
/// what test-parameter enumeration needs before a device exists.
#[derive(Debug, Clone, Copy)]
pub struct FormatQuery<'a> {
    catalog: &'a FormatCatalog,
}

impl<'a> FormatQuery<'a> {
    pub fn new(catalog: &'a FormatCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a FormatCatalog {
        self.catalog
    }

    pub fn descriptor(&self, format: TextureFormat) -> &'a FormatDescriptor {
        self.catalog.get(format)
    }

    pub fn is_color_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format).has_color()
    }

    pub fn is_depth_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format).has_depth()
    }

    pub fn is_stencil_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format).has_stencil()
    }

    pub fn is_depth_or_stencil_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format).is_depth_or_stencil()
    }

    pub fn is_compressed_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format).is_compressed()
    }

    pub fn is_srgb_format(&self, format: TextureFormat) -> bool {
        format.is_srgb()
    }

    /// Color formats read as integers by shaders.
    pub fn is_sint_or_uint_format(&self, format: TextureFormat) -> bool {
        self.descriptor(format)
            .color()
            .is_some_and(|color| matches!(color.sample_kind, SampleKind::Uint | SampleKind::Sint))
    }

    /// Compressed formats that store floating point values (BC6H).
    pub fn is_compressed_float_format(&self, format: TextureFormat) -> bool {
        matches!(
            format,
            TextureFormat::Bc6hRgbUfloat | TextureFormat::Bc6hRgbFloat
        )
    }

    pub fn is_possibly_render_attachment(&self, format: TextureFormat) -> bool {
        let desc = self.descriptor(format);
        desc.is_depth_or_stencil() || desc.render_target().is_some()
    }

    pub fn is_possibly_multisampled(&self, format: TextureFormat) -> bool {
        let desc = self.descriptor(format);
        desc.multisample || desc.gated_render.is_some()
    }

    pub fn is_possibly_storage_usable(&self, format: TextureFormat, access: StorageAccess) -> bool {
        let Some(color) = self.descriptor(format).color() else {
            return false;
        };
        match access {
            StorageAccess::ReadOnly => color.storage || tiers::TIER1_STORAGE.contains(&format),
            StorageAccess::WriteOnly => {
                color.storage
                    || tiers::TIER1_STORAGE.contains(&format)
                    || format == TextureFormat::Bgra8Unorm
            }
            StorageAccess::ReadWrite => {
                color.read_write_storage
                    || tiers::TIER2_READ_WRITE_STORAGE.contains(&format)
                    || format == TextureFormat::Bgra8Unorm
            }
        }
    }

    pub fn is_possibly_storage_readable(&self, format: TextureFormat) -> bool {
        self.is_possibly_storage_usable(format, StorageAccess::ReadOnly)
    }

    /// Features that must be enabled to create textures of every format in `formats`.
    pub fn required_features(
        &self,
        formats: impl IntoIterator<Item = TextureFormat>,
    ) -> BTreeSet<Feature> {
        formats
            .into_iter()
            .filter_map(|format| self.descriptor(format).required_feature)
            .collect()
    }

    /// Whether `format` can be used with `dimension` without any sliced-3D feature.
    pub fn dimension_compatible(&self, dimension: TextureDimension, format: TextureFormat) -> bool {
        dimension_compatible(self.descriptor(format), dimension, false, false)
    }
}

pub(crate) fn dimension_compatible(
    desc: &FormatDescriptor,
    dimension: TextureDimension,
    bc_sliced_3d: bool,
    astc_sliced_3d: bool,
) -> bool {
    match dimension {
        TextureDimension::D2 => true,
        _ if desc.is_depth_or_stencil() => false,
        TextureDimension::D1 => !desc.is_compressed(),
        TextureDimension::D3 => match desc.family {
            FormatFamily::Bc => bc_sliced_3d,
            FormatFamily::Astc => astc_sliced_3d,
            FormatFamily::Etc2 => false,
            _ => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_query(f: impl FnOnce(FormatQuery<'_>)) {
        let catalog = FormatCatalog::build().unwrap();
        f(FormatQuery::new(&catalog));
    }

    #[test]
    fn structural_predicates() {
        with_query(|q| {
            assert!(q.is_color_format(TextureFormat::Rgba8Unorm));
            assert!(q.is_depth_format(TextureFormat::Depth24PlusStencil8));
            assert!(q.is_stencil_format(TextureFormat::Depth24PlusStencil8));
            assert!(!q.is_stencil_format(TextureFormat::Depth16Unorm));
            assert!(q.is_compressed_format(TextureFormat::EacRg11Snorm));
            assert!(q.is_srgb_format(TextureFormat::Bgra8UnormSrgb));
            assert!(q.is_sint_or_uint_format(TextureFormat::Rgb10a2Uint));
            assert!(!q.is_sint_or_uint_format(TextureFormat::Stencil8));
            assert!(q.is_compressed_float_format(TextureFormat::Bc6hRgbUfloat));
            assert!(!q.is_compressed_float_format(TextureFormat::Bc7RgbaUnorm));
            assert!(!q.is_compressed_float_format(TextureFormat::Rgba16Float));
            let float_encoded: Vec<_> = TextureFormat::ALL
                .iter()
                .copied()
                .filter(|&format| q.is_compressed_float_format(format))
                .collect();
            assert_eq!(
                float_encoded,
                [TextureFormat::Bc6hRgbUfloat, TextureFormat::Bc6hRgbFloat]
            );
            assert!(float_encoded.iter().all(|&format| q.is_compressed_format(format)));
        });
    }

    #[test]
    fn depth_formats_are_possibly_render_attachments() {
        with_query(|q| {
            assert!(q.is_possibly_render_attachment(TextureFormat::Depth16Unorm));
            assert!(q.is_possibly_render_attachment(TextureFormat::Stencil8));
            assert!(q.is_possibly_render_attachment(TextureFormat::R16Unorm));
            assert!(q.is_possibly_render_attachment(TextureFormat::Rg11b10Ufloat));
            assert!(!q.is_possibly_render_attachment(TextureFormat::Rgb9e5Ufloat));
            assert!(!q.is_possibly_render_attachment(TextureFormat::Bc1RgbaUnorm));
        });
    }

    #[test]
    fn possibly_storage_covers_tier_lists() {
        with_query(|q| {
            assert!(q.is_possibly_storage_readable(TextureFormat::Rgba8Unorm));
            assert!(q.is_possibly_storage_readable(TextureFormat::R16Unorm));
            assert!(!q.is_possibly_storage_readable(TextureFormat::Bgra8Unorm));
            assert!(
                q.is_possibly_storage_usable(TextureFormat::Bgra8Unorm, StorageAccess::WriteOnly)
            );
            assert!(!q.is_possibly_storage_readable(TextureFormat::Depth32Float));
            assert!(
                !q.is_possibly_storage_usable(TextureFormat::Rg32Float, StorageAccess::ReadWrite)
            );
        });
    }

    #[test]
    fn required_features_of_bc_family() {
        with_query(|q| {
            let bc = q.catalog().family_formats(FormatFamily::Bc).iter().copied();
            assert_eq!(
                q.required_features(bc),
                BTreeSet::from([Feature::TextureCompressionBc])
            );
            assert!(q
                .required_features([TextureFormat::Rgba8Unorm, TextureFormat::Depth24Plus])
                .is_empty());
        });
    }

    #[test]
    fn dimension_rules_without_features() {
        with_query(|q| {
            use TextureDimension::*;
            assert!(q.dimension_compatible(D1, TextureFormat::Rgba8Unorm));
            assert!(q.dimension_compatible(D3, TextureFormat::Rgba8Unorm));
            assert!(!q.dimension_compatible(D1, TextureFormat::Depth16Unorm));
            assert!(!q.dimension_compatible(D3, TextureFormat::Depth16Unorm));
            assert!(q.dimension_compatible(D2, TextureFormat::Depth16Unorm));
            assert!(!q.dimension_compatible(D1, TextureFormat::Bc1RgbaUnorm));
            assert!(!q.dimension_compatible(D3, TextureFormat::Bc1RgbaUnorm));
            assert!(q.dimension_compatible(D2, TextureFormat::Astc4x4Unorm));
        });
    }
}
