use cs_core::{Image, MASK_CLEAR, MASK_SET};
use cs_stripe::{ColumnStripes, StripeConfig, StripeScanner, detect_stripes_in_col};

const SET: u8 = MASK_SET;
const CLEAR: u8 = MASK_CLEAR;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Target/background columns for `count` target bands of `band` pixels
/// separated by background gaps of `gap` pixels, framed by `pad` pixels
/// that belong to neither class.
fn striped_column(
    pad_before: usize,
    pad_after: usize,
    band: usize,
    gap: usize,
    count: usize,
) -> (Vec<u8>, Vec<u8>) {
    let mut target = vec![CLEAR; pad_before];
    let mut background = vec![CLEAR; pad_before];
    for i in 0..count {
        if i > 0 {
            target.extend(std::iter::repeat_n(CLEAR, gap));
            background.extend(std::iter::repeat_n(SET, gap));
        }
        target.extend(std::iter::repeat_n(SET, band));
        background.extend(std::iter::repeat_n(CLEAR, band));
    }
    target.extend(std::iter::repeat_n(CLEAR, pad_after));
    background.extend(std::iter::repeat_n(CLEAR, pad_after));
    (target, background)
}

fn ranges(out: &ColumnStripes) -> Vec<std::ops::Range<usize>> {
    out.regions.iter().map(|r| r.pixels()).collect()
}

#[test]
fn regions_shift_with_uniform_padding() {
    init_logging();
    let cfg = StripeConfig::default();

    let (t0, b0) = striped_column(12, 12, 5, 6, 4);
    let base = detect_stripes_in_col(&t0, &b0, &cfg).expect("equal lengths");
    assert!(base.accepted);
    assert_eq!(ranges(&base), vec![12..50]);

    for (before, after) in [(40, 12), (12, 80), (100, 100)] {
        let (t, b) = striped_column(before, after, 5, 6, 4);
        let out = detect_stripes_in_col(&t, &b, &cfg).expect("equal lengths");
        let shift = before - 12;
        let expected: Vec<_> = ranges(&base)
            .into_iter()
            .map(|r| r.start + shift..r.end + shift)
            .collect();
        assert_eq!(ranges(&out), expected, "padding {before}/{after}");
        assert_eq!(out.accepted, base.accepted);
    }
}

#[test]
fn repeated_detection_is_identical() {
    init_logging();
    let cfg = StripeConfig {
        gap_tolerance: 1,
        ..StripeConfig::default()
    };
    let (target, background) = striped_column(20, 7, 3, 3, 6);

    let first = detect_stripes_in_col(&target, &background, &cfg).expect("equal lengths");
    let second = detect_stripes_in_col(&target, &background, &cfg).expect("equal lengths");
    assert_eq!(first, second);
}

#[test]
fn mismatched_mask_lengths_are_an_error() {
    init_logging();
    let (target, mut background) = striped_column(10, 10, 4, 4, 3);
    background.push(CLEAR);
    assert!(detect_stripes_in_col(&target, &background, &StripeConfig::default()).is_err());
}

#[test]
fn scanner_matches_per_column_detection() {
    init_logging();
    let height = 60usize;
    let width = 5usize;
    let cfg = StripeConfig::default();

    // Each column gets a different vertical offset of the same pattern.
    let columns: Vec<_> = (0..width)
        .map(|x| {
            let before = 10 + 3 * x;
            let (t, b) = striped_column(before, 0, 4, 4, 3);
            let after = height - t.len();
            let (t, b) = (
                [t, vec![CLEAR; after]].concat(),
                [b, vec![CLEAR; after]].concat(),
            );
            (t, b)
        })
        .collect();

    let mut target = Image::new_fill(width, height, CLEAR);
    let mut background = Image::new_fill(width, height, CLEAR);
    for (x, (t, b)) in columns.iter().enumerate() {
        for y in 0..height {
            target.data_mut()[y * width + x] = t[y];
            background.data_mut()[y * width + x] = b[y];
        }
    }

    let mut scanner = StripeScanner::new();
    let scans = scanner
        .scan_cols(&target.as_view(), &background.as_view(), 0..width, &cfg)
        .expect("same-shape masks");

    for (scan, (t, b)) in scans.iter().zip(columns.iter()) {
        let direct = detect_stripes_in_col(t, b, &cfg).expect("equal lengths");
        assert_eq!(scan.stripes, direct);
        let start = 10 + 3 * scan.col;
        assert_eq!(ranges(&direct), vec![start..start + 20]);
    }
}
