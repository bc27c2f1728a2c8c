use cs_core::{Error, ImageView};
use log::{debug, trace};

use crate::{ColumnStripes, StripeConfig, detect_stripes_in_col};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScan {
    pub col: usize,
    pub stripes: ColumnStripes,
}

/// Runs the column detector over columns of a target/background mask pair.
///
/// Column samples are gathered into buffers owned by the scanner, so one
/// scanner can be reused across images without reallocating.
#[derive(Debug, Clone, Default)]
pub struct StripeScanner {
    target_col: Vec<u8>,
    background_col: Vec<u8>,
}

impl StripeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `cols` in the order given. Each result is independent; nothing
    /// is aggregated across columns.
    pub fn scan_cols(
        &mut self,
        target: &ImageView<'_, u8>,
        background: &ImageView<'_, u8>,
        cols: impl IntoIterator<Item = usize>,
        cfg: &StripeConfig,
    ) -> Result<Vec<ColumnScan>, Error> {
        if !target.same_shape(background) {
            return Err(Error::ShapeMismatch {
                expected: (target.width(), target.height()),
                actual: (background.width(), background.height()),
            });
        }
        cfg.validate()?;

        let mut out = Vec::new();
        let mut with_regions = 0usize;

        for col in cols {
            let target_line = target.gather_col(col, &mut self.target_col)?;
            let background_line = background.gather_col(col, &mut self.background_col)?;
            let stripes = detect_stripes_in_col(target_line, background_line, cfg)?;

            trace!(
                "col {col}: accepted={} regions={}",
                stripes.accepted,
                stripes.regions.len()
            );
            if !stripes.regions.is_empty() {
                with_regions += 1;
            }
            out.push(ColumnScan { col, stripes });
        }

        debug!(
            "scanned {} cols of {}x{} masks, {with_regions} with stripe regions",
            out.len(),
            target.width(),
            target.height()
        );
        Ok(out)
    }
}
