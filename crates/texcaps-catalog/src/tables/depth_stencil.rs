//! Depth and stencil formats, split by whether every aspect has an observable byte size.

use crate::descriptor::{AspectInfo, FormatEntry, SampleKind};
use crate::{Feature, TextureFormat};

use TextureFormat::*;

const E: FormatEntry = FormatEntry::ABSENT;

const STENCIL: AspectInfo = AspectInfo::new(SampleKind::Uint, 1);

pub(crate) const SIZED_DEFAULTS: FormatEntry = E.block(1, 1).multisample(true);

pub(crate) const SIZED_TABLE: &[(TextureFormat, FormatEntry)] = &[
    (Stencil8, E.stencil(STENCIL)),
    (
        Depth16Unorm,
        E.depth(AspectInfo::new(SampleKind::Depth, 2)),
    ),
    // Depth32Float depth can be copied out but not written by a copy.
    (
        Depth32Float,
        E.depth(AspectInfo::new(SampleKind::Depth, 4).copy_src_only()),
    ),
];

pub(crate) const UNSIZED_DEFAULTS: FormatEntry = E.block(1, 1).multisample(true);

pub(crate) const UNSIZED_TABLE: &[(TextureFormat, FormatEntry)] = &[
    (Depth24Plus, E.depth(AspectInfo::undefined_size(SampleKind::Depth))),
    (
        Depth24PlusStencil8,
        E.depth(AspectInfo::undefined_size(SampleKind::Depth))
            .stencil(STENCIL),
    ),
    (
        Depth32FloatStencil8,
        E.depth(AspectInfo::new(SampleKind::Depth, 4).copy_src_only())
            .stencil(STENCIL)
            .feature(Feature::Depth32FloatStencil8),
    ),
];
