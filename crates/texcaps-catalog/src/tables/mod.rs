//! Per-family format tables and the merge that turns them into descriptors.

mod compressed;
mod depth_stencil;
mod regular;

use crate::descriptor::{FormatDescriptor, FormatEntry, FormatFamily};
use crate::{Result, TextureFormat};

/// One family: its defaults and its per-format entries.
#[derive(Debug, Clone, Copy)]
pub struct FamilyTable {
    pub family: FormatFamily,
    pub defaults: FormatEntry,
    pub entries: &'static [(TextureFormat, FormatEntry)],
}

/// Every family, in catalog order.
pub const FAMILIES: &[FamilyTable] = &[
    FamilyTable {
        family: FormatFamily::Regular,
        defaults: regular::DEFAULTS,
        entries: regular::TABLE,
    },
    FamilyTable {
        family: FormatFamily::SizedDepthStencil,
        defaults: depth_stencil::SIZED_DEFAULTS,
        entries: depth_stencil::SIZED_TABLE,
    },
    FamilyTable {
        family: FormatFamily::UnsizedDepthStencil,
        defaults: depth_stencil::UNSIZED_DEFAULTS,
        entries: depth_stencil::UNSIZED_TABLE,
    },
    FamilyTable {
        family: FormatFamily::Bc,
        defaults: compressed::BC_DEFAULTS,
        entries: compressed::BC_TABLE,
    },
    FamilyTable {
        family: FormatFamily::Etc2,
        defaults: compressed::ETC2_DEFAULTS,
        entries: compressed::ETC2_TABLE,
    },
    FamilyTable {
        family: FormatFamily::Astc,
        defaults: compressed::ASTC_DEFAULTS,
        entries: compressed::ASTC_TABLE,
    },
];

/// Resolve every entry of a family as `merge(global, defaults, entry)`.
pub fn build_family(
    global: &FormatEntry,
    table: &FamilyTable,
) -> Result<Vec<FormatDescriptor>> {
    let base = global.merge(table.defaults);
    table
        .entries
        .iter()
        .map(|&(format, entry)| FormatDescriptor::from_entry(format, table.family, base.merge(entry)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{AspectInfo, SampleKind};
    use crate::Feature;

    #[test]
    fn family_defaults_fill_unset_keys() {
        const ENTRY: &[(TextureFormat, FormatEntry)] = &[(
            TextureFormat::Bc4RUnorm,
            FormatEntry::ABSENT.color(AspectInfo::new(SampleKind::Float, 8)),
        )];
        let table = FamilyTable {
            family: FormatFamily::Bc,
            defaults: FormatEntry::ABSENT
                .block(4, 4)
                .feature(Feature::TextureCompressionBc),
            entries: ENTRY,
        };
        let built = build_family(&FormatEntry::ABSENT, &table).unwrap();
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].block_width, 4);
        assert_eq!(built[0].required_feature, Some(Feature::TextureCompressionBc));
        assert_eq!(built[0].family, FormatFamily::Bc);
    }

    #[test]
    fn entry_overrides_family_defaults() {
        const ENTRY: &[(TextureFormat, FormatEntry)] = &[(
            TextureFormat::R8Snorm,
            FormatEntry::ABSENT
                .color(AspectInfo::new(SampleKind::Float, 1))
                .multisample(false),
        )];
        let table = FamilyTable {
            family: FormatFamily::Regular,
            defaults: FormatEntry::ABSENT.block(1, 1).multisample(true),
            entries: ENTRY,
        };
        let built = build_family(&FormatEntry::ABSENT, &table).unwrap();
        assert!(!built[0].multisample);
    }

    #[test]
    fn global_defaults_sit_below_family_defaults() {
        const ENTRY: &[(TextureFormat, FormatEntry)] = &[(
            TextureFormat::R8Unorm,
            FormatEntry::ABSENT.color(AspectInfo::new(SampleKind::Float, 1)),
        )];
        let global = FormatEntry::ABSENT.block(2, 2).multisample(true);
        let table = FamilyTable {
            family: FormatFamily::Regular,
            defaults: FormatEntry::ABSENT.block(1, 1),
            entries: ENTRY,
        };
        let built = build_family(&global, &table).unwrap();
        assert_eq!((built[0].block_width, built[0].block_height), (1, 1));
        assert!(built[0].multisample);
    }

    #[test]
    fn family_block_shape_is_enforced() {
        const ENTRY: &[(TextureFormat, FormatEntry)] = &[(
            TextureFormat::Etc2Rgb8Unorm,
            FormatEntry::ABSENT.color(AspectInfo::new(SampleKind::Float, 8)),
        )];
        let table = FamilyTable {
            family: FormatFamily::Etc2,
            defaults: FormatEntry::ABSENT.block(1, 1),
            entries: ENTRY,
        };
        assert!(matches!(
            build_family(&FormatEntry::ABSENT, &table),
            Err(crate::CatalogError::BlockSizeMismatch { .. })
        ));
    }

    #[test]
    fn every_shipped_family_resolves() {
        for table in FAMILIES {
            let built = build_family(&FormatEntry::ABSENT, table).unwrap();
            assert_eq!(built.len(), table.entries.len(), "{}", table.family);
        }
    }
}
