use std::ops::Range;

use cs_core::{Error, unit_indicator, unit_signs};
use cs_streak::{
    accepted_indices, continuous_runs, streak_lengths_bridged, streak_offsets, streak_ratios,
};
use log::debug;

use crate::StripeConfig;

/// A pixel range in one column believed to hold a periodic banded pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct StripeRegion {
    /// First pixel of the region.
    pub start: usize,
    /// One past the last pixel of the region.
    pub end: usize,
    /// Number of target-class streaks inside the region.
    pub stripe_count: usize,
    /// Mean width of those streaks, in pixels.
    pub mean_stripe_width: f32,
    /// Fraction of background-mask pixels among the checked non-target streaks.
    pub background_fraction: f32,
}

impl StripeRegion {
    pub fn pixels(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStripes {
    /// `true` when at least one run of periodic streaks was found, even if
    /// every run later failed the background density check.
    pub accepted: bool,
    pub regions: Vec<StripeRegion>,
}

/// Detects stripe regions in one column given its target and background masks.
///
/// Both masks hold raw values where [`cs_core::MASK_SET`] marks membership.
/// Target pixels become `+1`, everything else `-1`; the signal is streak
/// encoded and adjacent streak ratios inside the configured range mark
/// near-periodic positions. Runs of at least three such positions are kept
/// when enough of their non-target pixels are genuine background.
///
/// Columns too short to form a ratio yield an unaccepted, empty result.
pub fn detect_stripes_in_col(
    target_col: &[u8],
    background_col: &[u8],
    cfg: &StripeConfig,
) -> Result<ColumnStripes, Error> {
    if target_col.len() != background_col.len() {
        return Err(Error::SizeMismatch {
            expected: target_col.len(),
            actual: background_col.len(),
        });
    }
    cfg.validate()?;

    let signs = unit_signs(target_col);
    let background = unit_indicator(background_col);

    let streaks = streak_lengths_bridged(&signs, cfg.gap_tolerance);
    let ratios = streak_ratios(&streaks);
    let accepted = accepted_indices(&ratios, cfg.ratio_low, cfg.ratio_high);
    let grouping = continuous_runs(&accepted);

    if !grouping.found {
        debug!(
            "no periodic streak run: {} streaks, {} accepted ratios",
            streaks.len(),
            accepted.len()
        );
        return Ok(ColumnStripes::default());
    }

    let offsets = streak_offsets(&streaks);
    let mut regions = Vec::with_capacity(grouping.runs.len());

    for run in &grouping.runs {
        // Ratio `i` compares streaks `i` and `i + 1`, so the run touches
        // streaks `first..=last`.
        let first = accepted[run.start];
        let last = accepted[run.end - 1] + 1;
        // Regions end where the next accepted position starts; the final run
        // has no successor and ends with its last compared streak.
        let end = accepted.get(run.end).copied().unwrap_or(last + 1);

        let Some(fraction) = background_fraction(&streaks, &offsets, &background, first, last)
        else {
            debug!("streaks {first}..{last}: no non-target pixels to check");
            continue;
        };

        if fraction <= cfg.density_threshold {
            debug!(
                "streaks {first}..{last}: background fraction {fraction:.3} <= {:.3}, rejected",
                cfg.density_threshold
            );
            continue;
        }

        let (stripe_count, stripe_px) = streaks[first..end]
            .iter()
            .filter(|&&s| s > 0)
            .fold((0usize, 0usize), |(n, px), &s| (n + 1, px + s as usize));
        let mean_stripe_width = if stripe_count == 0 {
            0.0
        } else {
            stripe_px as f32 / stripe_count as f32
        };

        regions.push(StripeRegion {
            start: offsets[first],
            end: offsets[end],
            stripe_count,
            mean_stripe_width,
            background_fraction: fraction,
        });
    }

    Ok(ColumnStripes {
        accepted: true,
        regions,
    })
}

/// Background-mask density over the non-target streaks in `first..last`.
///
/// Starts one streak later when `first` is a target streak and then visits
/// every second streak. The last compared streak is never visited. `None`
/// when no pixels were visited.
fn background_fraction(
    streaks: &[i32],
    offsets: &[usize],
    background: &[u8],
    first: usize,
    last: usize,
) -> Option<f32> {
    let skip = usize::from(streaks[first] > 0);

    let mut set = 0usize;
    let mut width = 0usize;
    for j in (first + skip..last).step_by(2) {
        let px = offsets[j]..offsets[j + 1];
        set += background[px.clone()]
            .iter()
            .map(|&v| usize::from(v))
            .sum::<usize>();
        width += px.len();
    }

    if width == 0 {
        return None;
    }
    Some(set as f32 / width as f32)
}
