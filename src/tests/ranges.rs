use super::SectionRanges;
use crate::section::SectionRange;
use pretty_assertions::assert_eq;

#[test]
fn test_ranges_end_before_next_heading() {
    let ranges = SectionRanges::resolve(&[1, 3, 6], 8);

    assert_eq!(ranges.get(1), Some(SectionRange { start: 1, end: 2 }));
    assert_eq!(ranges.get(3), Some(SectionRange { start: 3, end: 5 }));
    assert_eq!(ranges.get(6), Some(SectionRange { start: 6, end: 8 }));
    assert_eq!(ranges.get(2), None);
}

#[test]
fn test_ranges_partition_document() {
    let max_line = 20;
    let ranges = SectionRanges::resolve(&[4, 5, 11, 17], max_line);

    for line in 4..=max_line {
        let owners = ranges.iter().filter(|r| r.contains(line)).count();
        assert_eq!(owners, 1, "line {line} should belong to exactly one section");
    }
    for line in 1..4 {
        assert!(ranges.iter().all(|r| !r.contains(line)));
    }
    assert_eq!(ranges.iter().last().map(|r| r.end), Some(max_line));
}

#[test]
fn test_unsorted_heading_lines() {
    let ranges = SectionRanges::resolve(&[9, 1, 5], 12);

    let starts: Vec<usize> = ranges.iter().map(|r| r.start).collect();
    assert_eq!(starts, vec![1, 5, 9]);
    assert_eq!(ranges.get(5), Some(SectionRange { start: 5, end: 8 }));
}

#[test]
fn test_single_heading_on_last_line() {
    let ranges = SectionRanges::resolve(&[7], 7);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges.get(7), Some(SectionRange { start: 7, end: 7 }));
}

#[test]
fn test_no_headings() {
    let ranges = SectionRanges::resolve(&[], 10);

    assert!(ranges.is_empty());
}
