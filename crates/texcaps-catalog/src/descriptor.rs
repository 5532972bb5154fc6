use serde::Serialize;

use crate::{CatalogError, Feature, Result, TextureFormat};

wire_enum! {
    /// How texels of an aspect are read by a shader.
    pub enum SampleKind ("sample kind") {
        Float => "float",
        UnfilterableFloat => "unfilterable-float",
        Uint => "uint",
        Sint => "sint",
        Depth => "depth",
    }
}

wire_enum! {
    /// The sub-table a format is declared in.
    pub enum FormatFamily ("format family") {
        Regular => "regular",
        SizedDepthStencil => "sized-depth-stencil",
        UnsizedDepthStencil => "unsized-depth-stencil",
        Bc => "bc",
        Etc2 => "etc2",
        Astc => "astc",
    }
}

impl FormatFamily {
    pub const fn is_compressed(self) -> bool {
        matches!(self, FormatFamily::Bc | FormatFamily::Etc2 | FormatFamily::Astc)
    }

    pub const fn is_depth_stencil(self) -> bool {
        matches!(
            self,
            FormatFamily::SizedDepthStencil | FormatFamily::UnsizedDepthStencil
        )
    }
}

/// Static capabilities of one aspect (color, depth or stencil) of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectInfo {
    pub sample_kind: SampleKind,
    pub copy_src: bool,
    pub copy_dst: bool,
    pub storage: bool,
    pub read_write_storage: bool,
    /// Bytes per texel block of this aspect; `None` when the size is implementation-defined.
    pub bytes: Option<u32>,
}

impl AspectInfo {
    /// A copyable, non-storage aspect.
    pub const fn new(sample_kind: SampleKind, bytes: u32) -> Self {
        Self {
            sample_kind,
            copy_src: true,
            copy_dst: true,
            storage: false,
            read_write_storage: false,
            bytes: Some(bytes),
        }
    }

    /// An aspect whose byte size is not observable (e.g. the depth of `depth24plus`).
    pub const fn undefined_size(sample_kind: SampleKind) -> Self {
        Self {
            sample_kind,
            copy_src: false,
            copy_dst: false,
            storage: false,
            read_write_storage: false,
            bytes: None,
        }
    }

    pub const fn storage(mut self) -> Self {
        self.storage = true;
        self
    }

    pub const fn read_write_storage(mut self) -> Self {
        self.storage = true;
        self.read_write_storage = true;
        self
    }

    pub const fn copy_src_only(mut self) -> Self {
        self.copy_dst = false;
        self
    }
}

/// Color render target properties of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRenderInfo {
    pub blendable: bool,
    pub resolvable: bool,
    /// Render-target pixel byte cost.
    pub byte_cost: u32,
    /// Render-target component alignment.
    pub alignment: u32,
}

/// Render target properties that only apply once `feature` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GatedRender {
    pub feature: Feature,
    pub info: ColorRenderInfo,
}

/// The aspects a format exposes.
///
/// Color and depth/stencil are mutually exclusive; every descriptor carries exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Aspects {
    Color(AspectInfo),
    Depth(AspectInfo),
    Stencil(AspectInfo),
    DepthStencil {
        depth: AspectInfo,
        stencil: AspectInfo,
    },
}

/// A partially specified catalog entry.
///
/// Family tables are written as `FormatEntry` values and merged key by key: global defaults
/// ([`FormatEntry::ABSENT`]), then family defaults, then the per-format entry. Every recognised
/// key is an `Option`, so "explicitly absent" is a value (`None`) and an unrecognised key cannot
/// be written at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry {
    pub block_width: Option<u32>,
    pub block_height: Option<u32>,
    pub color: Option<AspectInfo>,
    pub depth: Option<AspectInfo>,
    pub stencil: Option<AspectInfo>,
    pub color_render: Option<ColorRenderInfo>,
    pub gated_render: Option<GatedRender>,
    pub multisample: Option<bool>,
    pub required_feature: Option<Feature>,
    pub base_format: Option<TextureFormat>,
}

impl Default for FormatEntry {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl FormatEntry {
    /// Global defaults: every key explicitly absent.
    pub const ABSENT: FormatEntry = FormatEntry {
        block_width: None,
        block_height: None,
        color: None,
        depth: None,
        stencil: None,
        color_render: None,
        gated_render: None,
        multisample: None,
        required_feature: None,
        base_format: None,
    };

    pub const fn block(mut self, width: u32, height: u32) -> Self {
        self.block_width = Some(width);
        self.block_height = Some(height);
        self
    }

    pub const fn color(mut self, info: AspectInfo) -> Self {
        self.color = Some(info);
        self
    }

    pub const fn depth(mut self, info: AspectInfo) -> Self {
        self.depth = Some(info);
        self
    }

    pub const fn stencil(mut self, info: AspectInfo) -> Self {
        self.stencil = Some(info);
        self
    }

    pub const fn render(
        mut self,
        blendable: bool,
        resolvable: bool,
        byte_cost: u32,
        alignment: u32,
    ) -> Self {
        self.color_render = Some(ColorRenderInfo {
            blendable,
            resolvable,
            byte_cost,
            alignment,
        });
        self
    }

    /// Blendable, resolvable render target once `feature` is enabled.
    pub const fn gated_render(mut self, feature: Feature, byte_cost: u32, alignment: u32) -> Self {
        self.gated_render = Some(GatedRender {
            feature,
            info: ColorRenderInfo {
                blendable: true,
                resolvable: true,
                byte_cost,
                alignment,
            },
        });
        self
    }

    pub const fn multisample(mut self, multisample: bool) -> Self {
        self.multisample = Some(multisample);
        self
    }

    pub const fn feature(mut self, feature: Feature) -> Self {
        self.required_feature = Some(feature);
        self
    }

    pub const fn base(mut self, format: TextureFormat) -> Self {
        self.base_format = Some(format);
        self
    }

    /// Key-wise merge; keys set in `overrides` win.
    ///
    /// An unset key in `overrides` always falls through to `self`, so a later layer can replace a
    /// default but cannot clear it back to absent. Keys that some formats of a family lack (such
    /// as `required_feature`) belong in the per-format entries rather than the family defaults.
    pub fn merge(self, overrides: FormatEntry) -> FormatEntry {
        FormatEntry {
            block_width: overrides.block_width.or(self.block_width),
            block_height: overrides.block_height.or(self.block_height),
            color: overrides.color.or(self.color),
            depth: overrides.depth.or(self.depth),
            stencil: overrides.stencil.or(self.stencil),
            color_render: overrides.color_render.or(self.color_render),
            gated_render: overrides.gated_render.or(self.gated_render),
            multisample: overrides.multisample.or(self.multisample),
            required_feature: overrides.required_feature.or(self.required_feature),
            base_format: overrides.base_format.or(self.base_format),
        }
    }
}

/// Texel block geometry of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    pub block_width: u32,
    pub block_height: u32,
    pub bytes_per_block: Option<u32>,
}

/// Fully resolved, immutable capabilities of one texture format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatDescriptor {
    pub format: TextureFormat,
    pub family: FormatFamily,
    pub block_width: u32,
    pub block_height: u32,
    pub aspects: Aspects,
    /// Present only when the format is a color render target without any feature gate.
    pub color_render: Option<ColorRenderInfo>,
    pub gated_render: Option<GatedRender>,
    pub multisample: bool,
    pub required_feature: Option<Feature>,
    pub base_format: Option<TextureFormat>,
    /// Size of the single aspect; `None` for combined depth-stencil formats and unsized aspects.
    pub bytes_per_block: Option<u32>,
}

impl FormatDescriptor {
    /// Resolve a merged entry into a descriptor.
    pub fn from_entry(
        format: TextureFormat,
        family: FormatFamily,
        entry: FormatEntry,
    ) -> Result<Self> {
        let (Some(block_width), Some(block_height)) = (entry.block_width, entry.block_height) else {
            return Err(CatalogError::MissingBlockSize { format });
        };
        if block_width == 0 || block_height == 0 {
            return Err(CatalogError::ZeroBlockSize {
                format,
                width: block_width,
                height: block_height,
            });
        }
        // Compressed families use multi-texel blocks; every other family is 1x1.
        let single_texel = block_width == 1 && block_height == 1;
        if single_texel == family.is_compressed() {
            return Err(CatalogError::BlockSizeMismatch {
                format,
                family,
                width: block_width,
                height: block_height,
            });
        }
        let gated = entry.gated_render.as_ref().map(|gated| &gated.info);
        if entry.color_render.iter().chain(gated).any(|info| info.alignment == 0) {
            return Err(CatalogError::ZeroRenderAlignment { format });
        }

        let aspects = match (entry.color, entry.depth, entry.stencil) {
            (Some(color), None, None) => Aspects::Color(color),
            (None, Some(depth), None) => Aspects::Depth(depth),
            (None, None, Some(stencil)) => Aspects::Stencil(stencil),
            (None, Some(depth), Some(stencil)) => Aspects::DepthStencil { depth, stencil },
            (None, None, None) => return Err(CatalogError::MissingAspect { format }),
            (Some(_), _, _) => return Err(CatalogError::ConflictingAspects { format }),
        };

        let bytes_per_block = match aspects {
            Aspects::Color(info) | Aspects::Depth(info) | Aspects::Stencil(info) => info.bytes,
            Aspects::DepthStencil { .. } => None,
        };

        Ok(Self {
            format,
            family,
            block_width,
            block_height,
            aspects,
            color_render: entry.color_render,
            gated_render: entry.gated_render,
            multisample: entry.multisample.unwrap_or(false),
            required_feature: entry.required_feature,
            base_format: entry.base_format,
            bytes_per_block,
        })
    }

    pub fn color(&self) -> Option<&AspectInfo> {
        match &self.aspects {
            Aspects::Color(info) => Some(info),
            _ => None,
        }
    }

    pub fn depth(&self) -> Option<&AspectInfo> {
        match &self.aspects {
            Aspects::Depth(info) | Aspects::DepthStencil { depth: info, .. } => Some(info),
            _ => None,
        }
    }

    pub fn stencil(&self) -> Option<&AspectInfo> {
        match &self.aspects {
            Aspects::Stencil(info) | Aspects::DepthStencil { stencil: info, .. } => Some(info),
            _ => None,
        }
    }

    pub fn has_color(&self) -> bool {
        self.color().is_some()
    }

    pub fn has_depth(&self) -> bool {
        self.depth().is_some()
    }

    pub fn has_stencil(&self) -> bool {
        self.stencil().is_some()
    }

    pub fn is_depth_or_stencil(&self) -> bool {
        !self.has_color()
    }

    pub fn is_compressed(&self) -> bool {
        self.block_width > 1 || self.block_height > 1
    }

    pub fn is_srgb(&self) -> bool {
        self.format.is_srgb()
    }

    pub fn block_info(&self) -> BlockInfo {
        BlockInfo {
            block_width: self.block_width,
            block_height: self.block_height,
            bytes_per_block: self.bytes_per_block,
        }
    }

    /// Bytes per block, failing instead of treating an undefined size as zero.
    pub fn definite_bytes_per_block(&self) -> Result<u32> {
        self.bytes_per_block
            .ok_or(CatalogError::UndefinedBlockSize {
                format: self.format,
            })
    }

    /// Tightly packed bytes for one row of blocks covering `width` texels.
    pub fn bytes_per_row(&self, width: u32) -> Result<u64> {
        let bytes = self.definite_bytes_per_block()?;
        Ok(u64::from(width.div_ceil(self.block_width)) * u64::from(bytes))
    }

    /// Rows of blocks covering `height` texels.
    pub fn rows_per_image(&self, height: u32) -> u32 {
        height.div_ceil(self.block_height)
    }

    /// Render target properties, whether unconditional or feature gated.
    pub fn render_target(&self) -> Option<&ColorRenderInfo> {
        self.color_render
            .as_ref()
            .or(self.gated_render.as_ref().map(|gated| &gated.info))
    }
}
