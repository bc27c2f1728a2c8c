use std::ops::Range;

/// Minimum number of consecutive indices that form a run.
pub const MIN_RUN_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuousRuns {
    /// `true` when at least one run qualified.
    pub found: bool,
    /// Half-open position ranges into the input slice, in input order.
    pub runs: Vec<Range<usize>>,
}

/// Finds maximal runs of values that step up by exactly one.
///
/// Any other transition (equal, decreasing, or a jump) closes the current
/// run and starts a new one at the breaking position. Runs shorter than
/// [`MIN_RUN_LEN`] are dropped.
pub fn continuous_runs(indices: &[usize]) -> ContinuousRuns {
    let mut runs = Vec::new();
    let mut start = 0usize;

    for i in 1..indices.len() {
        if indices[i - 1].checked_add(1) != Some(indices[i]) {
            if i - start >= MIN_RUN_LEN {
                runs.push(start..i);
            }
            start = i;
        }
    }

    if indices.len() - start >= MIN_RUN_LEN {
        runs.push(start..indices.len());
    }

    ContinuousRuns {
        found: !runs.is_empty(),
        runs,
    }
}
