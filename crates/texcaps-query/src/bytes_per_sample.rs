use texcaps_catalog::TextureFormat;

use crate::{FormatQuery, QueryError, Result};

impl FormatQuery<'_> {
    /// Bytes one sample occupies across a set of color attachments, in attachment order.
    ///
    /// Each attachment starts at the running offset rounded up to its render alignment and adds its
    /// byte cost, so the result depends on order. Feature-gated render targets count with the
    /// cost they have once their feature is enabled.
    pub fn compute_bytes_per_sample(&self, formats: &[TextureFormat]) -> Result<u32> {
        formats
            .iter()
            .enumerate()
            .try_fold(0u32, |offset, (index, &format)| {
                let info = self
                    .descriptor(format)
                    .render_target()
                    .ok_or(QueryError::NotColorRenderable { format })?;
                offset
                    .checked_next_multiple_of(info.alignment)
                    .and_then(|start| start.checked_add(info.byte_cost))
                    .ok_or(QueryError::BytesPerSampleOverflow { index, format })
            })
    }
}
