use crate::descriptor::{FormatDescriptor, FormatEntry, FormatFamily};
use crate::tables::{self, FamilyTable};
use crate::{CatalogError, Result, TextureFormat};

wire_enum! {
    /// A named, derived subset of the catalog.
    pub enum FormatGroup ("format group") {
        All => "all",
        Color => "color",
        DepthStencil => "depth-stencil",
        Compressed => "compressed",
        Encodable => "encodable",
        Sized => "sized",
        Uncompressed => "uncompressed",
        Regular => "regular",
        SizedDepthStencil => "sized-depth-stencil",
        UnsizedDepthStencil => "unsized-depth-stencil",
        Bc => "bc",
        Etc2 => "etc2",
        Astc => "astc",
    }
}

impl FormatGroup {
    fn contains(self, desc: &FormatDescriptor) -> bool {
        let family = desc.family;
        match self {
            FormatGroup::All => true,
            FormatGroup::Color => desc.has_color(),
            FormatGroup::DepthStencil => desc.is_depth_or_stencil(),
            FormatGroup::Compressed => family.is_compressed(),
            FormatGroup::Encodable => matches!(
                family,
                FormatFamily::Regular | FormatFamily::SizedDepthStencil
            ),
            FormatGroup::Sized => family != FormatFamily::UnsizedDepthStencil,
            FormatGroup::Uncompressed => !family.is_compressed(),
            FormatGroup::Regular => family == FormatFamily::Regular,
            FormatGroup::SizedDepthStencil => family == FormatFamily::SizedDepthStencil,
            FormatGroup::UnsizedDepthStencil => family == FormatFamily::UnsizedDepthStencil,
            FormatGroup::Bc => family == FormatFamily::Bc,
            FormatGroup::Etc2 => family == FormatFamily::Etc2,
            FormatGroup::Astc => family == FormatFamily::Astc,
        }
    }
}

/// The immutable registry of every texture format and its capabilities.
///
/// Built once by [`FormatCatalog::build`] and read-only afterwards; share it by reference (it is
/// `Send + Sync`). Derived lists are computed during the build so they always agree with the
/// descriptors.
#[derive(Debug, Clone)]
pub struct FormatCatalog {
    // Indexed by `TextureFormat::index`.
    descriptors: Vec<FormatDescriptor>,
    // Indexed by `FormatGroup::index`.
    groups: Vec<Vec<TextureFormat>>,
}

impl FormatCatalog {
    /// Build the catalog from the shipped family tables.
    pub fn build() -> Result<Self> {
        Self::from_families(&FormatEntry::ABSENT, tables::FAMILIES)
    }

    /// Build a catalog from arbitrary family tables.
    ///
    /// Every [`TextureFormat`] must be declared by exactly one family.
    pub fn from_families(global: &FormatEntry, families: &[FamilyTable]) -> Result<Self> {
        let mut slots: Vec<Option<FormatDescriptor>> = vec![None; TextureFormat::COUNT];

        for table in families {
            let built = tables::build_family(global, table)?;
            tracing::trace!(family = %table.family, formats = built.len(), "built format family");

            for desc in built {
                let slot = &mut slots[desc.format.index()];
                if let Some(existing) = slot {
                    return Err(CatalogError::DuplicateFormat {
                        format: desc.format,
                        first: existing.family,
                        second: desc.family,
                    });
                }
                *slot = Some(desc);
            }
        }

        let descriptors = slots
            .into_iter()
            .zip(TextureFormat::ALL)
            .map(|(slot, &format)| slot.ok_or(CatalogError::MissingFormat { format }))
            .collect::<Result<Vec<_>>>()?;

        let groups = FormatGroup::ALL
            .iter()
            .map(|&group| {
                descriptors
                    .iter()
                    .filter(|desc| group.contains(desc))
                    .map(|desc| desc.format)
                    .collect()
            })
            .collect();

        tracing::debug!(formats = descriptors.len(), "texture format catalog built");
        Ok(Self {
            descriptors,
            groups,
        })
    }

    pub fn get(&self, format: TextureFormat) -> &FormatDescriptor {
        &self.descriptors[format.index()]
    }

    /// Look up a descriptor by wire identifier.
    pub fn lookup(&self, name: &str) -> Result<&FormatDescriptor> {
        let format: TextureFormat = name.parse()?;
        Ok(self.get(format))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> + '_ {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Formats in `group`, in catalog order.
    pub fn group(&self, group: FormatGroup) -> &[TextureFormat] {
        &self.groups[group.index()]
    }

    pub fn all_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::All)
    }

    pub fn color_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::Color)
    }

    pub fn depth_stencil_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::DepthStencil)
    }

    pub fn compressed_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::Compressed)
    }

    /// Regular and sized depth-stencil formats: uncompressed with a definite texel size.
    pub fn encodable_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::Encodable)
    }

    /// Formats with a definite bytes-per-block (everything except unsized depth-stencil).
    pub fn sized_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::Sized)
    }

    pub fn uncompressed_formats(&self) -> &[TextureFormat] {
        self.group(FormatGroup::Uncompressed)
    }

    pub fn family_formats(&self, family: FormatFamily) -> &[TextureFormat] {
        let group = match family {
            FormatFamily::Regular => FormatGroup::Regular,
            FormatFamily::SizedDepthStencil => FormatGroup::SizedDepthStencil,
            FormatFamily::UnsizedDepthStencil => FormatGroup::UnsizedDepthStencil,
            FormatFamily::Bc => FormatGroup::Bc,
            FormatFamily::Etc2 => FormatGroup::Etc2,
            FormatFamily::Astc => FormatGroup::Astc,
        };
        self.group(group)
    }
}
