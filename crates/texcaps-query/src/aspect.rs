use texcaps_catalog::{AspectInfo, Aspects, SampleKind, TextureFormat};

use crate::{FormatQuery, QueryError, Result, TextureAspect};

/// Single-aspect views of combined depth-stencil formats: `(combined, depth-only, stencil-only)`.
///
/// Listed explicitly: the single-aspect names do not follow from the combined names.
const COMBINED_ASPECTS: &[(TextureFormat, TextureFormat, TextureFormat)] = &[
    (
        TextureFormat::Depth24PlusStencil8,
        TextureFormat::Depth24Plus,
        TextureFormat::Stencil8,
    ),
    (
        TextureFormat::Depth32FloatStencil8,
        TextureFormat::Depth32Float,
        TextureFormat::Stencil8,
    ),
];

impl<'a> FormatQuery<'a> {
    /// The format that `aspect` of `format` behaves as in copies and views.
    pub fn resolve_aspect_format(
        &self,
        format: TextureFormat,
        aspect: TextureAspect,
    ) -> Result<TextureFormat> {
        if aspect == TextureAspect::All {
            return Ok(format);
        }

        if let Some(&(_, depth, stencil)) = COMBINED_ASPECTS
            .iter()
            .find(|(combined, _, _)| *combined == format)
        {
            return Ok(match aspect {
                TextureAspect::DepthOnly => depth,
                _ => stencil,
            });
        }

        match (&self.descriptor(format).aspects, aspect) {
            (Aspects::Depth(_), TextureAspect::DepthOnly)
            | (Aspects::Stencil(_), TextureAspect::StencilOnly) => Ok(format),
            _ => Err(QueryError::AspectNotPresent { format, aspect }),
        }
    }

    /// Capabilities of one aspect. `all` is only accepted on single-aspect formats.
    pub fn aspect_info(
        &self,
        format: TextureFormat,
        aspect: TextureAspect,
    ) -> Result<&'a AspectInfo> {
        let desc = self.descriptor(format);
        let info = match (aspect, &desc.aspects) {
            (TextureAspect::All, Aspects::DepthStencil { .. }) => {
                return Err(QueryError::AmbiguousAspect { format })
            }
            (
                TextureAspect::All,
                Aspects::Color(info) | Aspects::Depth(info) | Aspects::Stencil(info),
            ) => Some(info),
            (TextureAspect::DepthOnly, _) => desc.depth(),
            (TextureAspect::StencilOnly, _) => desc.stencil(),
        };
        info.ok_or(QueryError::AspectNotPresent { format, aspect })
    }

    /// Bytes per texel of one aspect of a depth/stencil format.
    pub fn depth_stencil_aspect_size(
        &self,
        format: TextureFormat,
        aspect: TextureAspect,
    ) -> Result<u32> {
        if !self.is_depth_or_stencil_format(format) {
            return Err(QueryError::NotDepthStencil { format });
        }
        self.aspect_info(format, aspect)?
            .bytes
            .ok_or(QueryError::UndefinedAspectSize { format, aspect })
    }

    pub fn can_copy_to_aspect(&self, format: TextureFormat, aspect: TextureAspect) -> Result<bool> {
        Ok(self.aspect_info(format, aspect)?.copy_dst)
    }

    pub fn can_copy_from_aspect(
        &self,
        format: TextureFormat,
        aspect: TextureAspect,
    ) -> Result<bool> {
        Ok(self.aspect_info(format, aspect)?.copy_src)
    }

    pub fn sample_kind(&self, format: TextureFormat, aspect: TextureAspect) -> Result<SampleKind> {
        Ok(self.aspect_info(format, aspect)?.sample_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texcaps_catalog::FormatCatalog;

    use TextureAspect::*;
    use TextureFormat::*;

    fn catalog() -> FormatCatalog {
        FormatCatalog::build().unwrap()
    }

    #[test]
    fn all_resolves_to_itself() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        for &format in TextureFormat::ALL {
            assert_eq!(q.resolve_aspect_format(format, All).unwrap(), format);
        }
    }

    #[test]
    fn combined_formats_resolve_through_table() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        let resolve = |format, aspect| q.resolve_aspect_format(format, aspect).unwrap();
        assert_eq!(resolve(Depth24PlusStencil8, DepthOnly), Depth24Plus);
        assert_eq!(resolve(Depth24PlusStencil8, StencilOnly), Stencil8);
        assert_eq!(resolve(Depth32FloatStencil8, DepthOnly), Depth32Float);
        assert_eq!(resolve(Depth32FloatStencil8, StencilOnly), Stencil8);
    }

    #[test]
    fn single_aspect_formats_resolve_only_their_aspect() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        assert_eq!(q.resolve_aspect_format(Depth16Unorm, DepthOnly).unwrap(), Depth16Unorm);
        assert_eq!(q.resolve_aspect_format(Stencil8, StencilOnly).unwrap(), Stencil8);
        assert_eq!(
            q.resolve_aspect_format(Depth16Unorm, StencilOnly),
            Err(QueryError::AspectNotPresent {
                format: Depth16Unorm,
                aspect: StencilOnly
            })
        );
        assert!(q.resolve_aspect_format(Rgba8Unorm, DepthOnly).is_err());
    }

    #[test]
    fn aspect_sizes() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        let size = |format, aspect| q.depth_stencil_aspect_size(format, aspect);
        assert_eq!(size(Depth32FloatStencil8, DepthOnly), Ok(4));
        assert_eq!(size(Depth24PlusStencil8, StencilOnly), Ok(1));
        assert_eq!(size(Depth16Unorm, All), Ok(2));
        assert_eq!(
            q.depth_stencil_aspect_size(Depth24Plus, DepthOnly),
            Err(QueryError::UndefinedAspectSize {
                format: Depth24Plus,
                aspect: DepthOnly
            })
        );
        assert_eq!(
            q.depth_stencil_aspect_size(Depth24PlusStencil8, All),
            Err(QueryError::AmbiguousAspect {
                format: Depth24PlusStencil8
            })
        );
        assert_eq!(
            q.depth_stencil_aspect_size(Rgba8Unorm, All),
            Err(QueryError::NotDepthStencil { format: Rgba8Unorm })
        );
    }

    #[test]
    fn copy_capabilities_per_aspect() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        assert!(q.can_copy_from_aspect(Depth32Float, DepthOnly).unwrap());
        assert!(!q.can_copy_to_aspect(Depth32Float, DepthOnly).unwrap());
        assert!(q.can_copy_to_aspect(Depth32FloatStencil8, StencilOnly).unwrap());
        assert!(!q.can_copy_from_aspect(Depth24Plus, DepthOnly).unwrap());
        assert!(q.can_copy_to_aspect(Rgba8Unorm, All).unwrap());
        assert_eq!(
            q.can_copy_to_aspect(Rgba8Unorm, StencilOnly),
            Err(QueryError::AspectNotPresent {
                format: Rgba8Unorm,
                aspect: StencilOnly
            })
        );
    }

    #[test]
    fn sample_kind_follows_selected_aspect() {
        let catalog = catalog();
        let q = FormatQuery::new(&catalog);
        let kind = |format, aspect| q.sample_kind(format, aspect).unwrap();
        assert_eq!(kind(Depth24PlusStencil8, DepthOnly), SampleKind::Depth);
        assert_eq!(kind(Depth24PlusStencil8, StencilOnly), SampleKind::Uint);
        assert_eq!(kind(R32Float, All), SampleKind::UnfilterableFloat);
    }
}
