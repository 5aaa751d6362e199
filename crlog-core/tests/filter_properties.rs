//! Property tests for the carriage-return filter

use crlog_core::{filter_bytes, LineFilter, OverwriteMode};
use proptest::prelude::*;

/// Bytes weighted towards the two separators so runs actually collapse
fn log_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => b'a'..=b'z',
            2 => Just(b'\r'),
            2 => Just(b'\n'),
            1 => any::<u8>(),
        ],
        0..256,
    )
}

fn crfree_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("no CR", |b| *b != b'\r'), 0..256)
}

/// Feed `input` split at `cuts` (sorted, deduplicated offsets).
fn filter_chunked(input: &[u8], cuts: &[usize], mode: OverwriteMode) -> Vec<u8> {
    let mut filter = LineFilter::new(mode);
    let mut out = Vec::new();
    let mut start = 0;
    for &cut in cuts {
        filter.process(&input[start..cut], &mut out).unwrap();
        start = cut;
    }
    filter.process(&input[start..], &mut out).unwrap();
    filter.finish(&mut out).unwrap();
    out
}

fn sorted_cuts(len: usize, raw: Vec<usize>) -> Vec<usize> {
    let mut cuts: Vec<usize> = raw.into_iter().map(|c| c % (len + 1)).collect();
    cuts.sort_unstable();
    cuts.dedup();
    cuts
}

/// Byte-at-a-time terminal model: one row, a cursor, overwrite in place.
fn terminal_model(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut row: Vec<u8> = Vec::new();
    let mut col = 0;
    for &byte in input {
        match byte {
            b'\r' => col = 0,
            b'\n' => {
                out.append(&mut row);
                out.push(b'\n');
                col = 0;
            }
            _ => {
                if col < row.len() {
                    row[col] = byte;
                } else {
                    row.push(byte);
                }
                col += 1;
            }
        }
    }
    out.extend_from_slice(&row);
    out
}

/// Keep only what follows the last CR of every LF-delimited run.
fn last_segment_model(input: &[u8]) -> Vec<u8> {
    let runs: Vec<&[u8]> = input.split(|b| *b == b'\n').collect();
    let mut out = Vec::new();
    for (i, run) in runs.iter().enumerate() {
        let kept = match run.iter().rposition(|b| *b == b'\r') {
            Some(pos) => &run[pos + 1..],
            None => run,
        };
        out.extend_from_slice(kept);
        if i + 1 < runs.len() {
            out.push(b'\n');
        }
    }
    out
}

proptest! {
    #[test]
    fn chunking_never_changes_output(input in log_bytes(), raw_cuts in prop::collection::vec(any::<usize>(), 0..16)) {
        let cuts = sorted_cuts(input.len(), raw_cuts);
        for mode in [OverwriteMode::Retain, OverwriteMode::Truncate] {
            prop_assert_eq!(filter_chunked(&input, &cuts, mode), filter_bytes(&input, mode));
        }
    }

    #[test]
    fn retain_matches_terminal_model(input in log_bytes()) {
        prop_assert_eq!(filter_bytes(&input, OverwriteMode::Retain), terminal_model(&input));
    }

    #[test]
    fn truncate_keeps_text_after_last_carriage_return(input in log_bytes()) {
        prop_assert_eq!(filter_bytes(&input, OverwriteMode::Truncate), last_segment_model(&input));
    }

    #[test]
    fn input_without_carriage_returns_passes_through(input in crfree_bytes()) {
        prop_assert_eq!(filter_bytes(&input, OverwriteMode::Retain), input.clone());
        prop_assert_eq!(filter_bytes(&input, OverwriteMode::Truncate), input);
    }

    #[test]
    fn filtering_is_idempotent(input in log_bytes()) {
        let once = filter_bytes(&input, OverwriteMode::Retain);
        prop_assert!(!once.contains(&b'\r'));
        prop_assert_eq!(filter_bytes(&once, OverwriteMode::Retain), once);
    }

    #[test]
    fn output_never_longer_than_input(input in log_bytes()) {
        let mut filter = LineFilter::default();
        let mut out = Vec::new();
        filter.process(&input, &mut out).unwrap();
        filter.finish(&mut out).unwrap();

        prop_assert!(out.len() <= input.len());
        prop_assert_eq!(filter.stats().bytes_out, out.len() as u64);
        prop_assert_eq!(
            filter.stats().lines,
            input.iter().filter(|b| **b == b'\n').count() as u64
        );
    }
}
