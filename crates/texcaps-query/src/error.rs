use texcaps_catalog::{CatalogError, TextureFormat};
use thiserror::Error;

use crate::TextureAspect;

pub type Result<T> = std::result::Result<T, QueryError>;

/// A query that does not apply to the format it was asked about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("format {format} has no {aspect} aspect")]
    AspectNotPresent {
        format: TextureFormat,
        aspect: TextureAspect,
    },

    #[error("format {format} has both depth and stencil; select depth-only or stencil-only")]
    AmbiguousAspect { format: TextureFormat },

    #[error("the {aspect} aspect of {format} has no defined byte size")]
    UndefinedAspectSize {
        format: TextureFormat,
        aspect: TextureAspect,
    },

    #[error("format {format} is not a depth/stencil format")]
    NotDepthStencil { format: TextureFormat },

    #[error("format {format} is never a color render target")]
    NotColorRenderable { format: TextureFormat },

    #[error("bytes per sample overflow at attachment {index} ({format})")]
    BytesPerSampleOverflow { index: usize, format: TextureFormat },
}
