use thiserror::Error;

use crate::{FormatFamily, TextureFormat};

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or reading the format catalog.
///
/// Every variant is a contract violation: either a family table is malformed (caught by
/// [`crate::FormatCatalog::build`]) or a caller asked for something the catalog cannot answer,
/// such as the byte size of a format whose size is undefined. None of them are expected at
/// runtime once the tables are correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown {kind} identifier {name:?}")]
    UnknownIdentifier { kind: &'static str, name: String },

    #[error("format {format} has no block dimensions after merging defaults")]
    MissingBlockSize { format: TextureFormat },

    #[error("format {format} has a zero block dimension ({width}x{height})")]
    ZeroBlockSize {
        format: TextureFormat,
        width: u32,
        height: u32,
    },

    #[error("format {format} has {width}x{height} blocks, which the {family} family does not allow")]
    BlockSizeMismatch {
        format: TextureFormat,
        family: FormatFamily,
        width: u32,
        height: u32,
    },

    #[error("format {format} declares a render target alignment of zero")]
    ZeroRenderAlignment { format: TextureFormat },

    #[error("format {format} declares both a color aspect and depth/stencil aspects")]
    ConflictingAspects { format: TextureFormat },

    #[error("format {format} declares no aspect")]
    MissingAspect { format: TextureFormat },

    #[error("format {format} appears in both the {first} and {second} families")]
    DuplicateFormat {
        format: TextureFormat,
        first: FormatFamily,
        second: FormatFamily,
    },

    #[error("format {format} is not listed in any family table")]
    MissingFormat { format: TextureFormat },

    #[error("format {format} has no definite bytes per block")]
    UndefinedBlockSize { format: TextureFormat },
}
