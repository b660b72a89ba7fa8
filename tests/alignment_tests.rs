use diffdesk::diff::{
    align, split_lines, AlignedRow, DiffAlgorithmType, DiffGenerator, DiffSegment, Granularity,
    RowStatus, SegmentKind,
};

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "only right\n"),
    ("only left", ""),
    ("a\nb\nc", "a\nx\nc"),
    ("a\nb", "a\nb\nc"),
    ("a\nb\nc\n", "a\nc\n"),
    ("one\n\n\ntwo\n", "one\n\n\ntwo\nthree\n"),
    ("fn main() {\n    println!(\"hi\");\n}\n", "fn main() {\n    let x = 1;\n    println!(\"{}\", x);\n}\n"),
    ("x\ny\nz", "z\ny\nx"),
    ("same\n", "same"),
    ("\n\n\n", "\n"),
];

fn left_column(rows: &[AlignedRow]) -> Vec<&str> {
    rows.iter()
        .filter(|r| r.status != RowStatus::Added)
        .map(|r| r.left.as_str())
        .collect()
}

fn right_column(rows: &[AlignedRow]) -> Vec<&str> {
    rows.iter()
        .filter(|r| r.status != RowStatus::Removed)
        .map(|r| r.right.as_str())
        .collect()
}

#[test]
fn test_columns_reconstruct_both_texts() {
    for algorithm in DiffAlgorithmType::all() {
        let generator = DiffGenerator::new(*algorithm);

        for (original, modified) in PAIRS {
            let rows = align(&generator.compute(original, modified, Granularity::Line));

            assert_eq!(
                left_column(&rows),
                split_lines(original),
                "left column of {:?} vs {:?} with {}",
                original,
                modified,
                algorithm
            );
            assert_eq!(
                right_column(&rows),
                split_lines(modified),
                "right column of {:?} vs {:?} with {}",
                original,
                modified,
                algorithm
            );
        }
    }
}

#[test]
fn test_identical_texts_align_unchanged() {
    let generator = DiffGenerator::default();

    for (text, _) in PAIRS {
        let rows = align(&generator.compute(text, text, Granularity::Line));

        assert_eq!(rows.len(), split_lines(text).len());
        for row in &rows {
            assert_eq!(row.status, RowStatus::Unchanged);
            assert_eq!(row.left, row.right);
        }
    }
}

#[test]
fn test_alignment_is_idempotent() {
    let generator = DiffGenerator::default();

    for (original, modified) in PAIRS {
        let segments = generator.compute(original, modified, Granularity::Line);
        assert_eq!(align(&segments), align(&segments));
    }
}

#[test]
fn test_modified_rows_come_only_from_adjacent_groups() {
    let generator = DiffGenerator::default();

    for (original, modified) in PAIRS {
        let segments = generator.compute(original, modified, Granularity::Line);
        let has_adjacent_group = segments
            .windows(2)
            .any(|w| w[0].kind == SegmentKind::Removed && w[1].kind == SegmentKind::Added);

        let rows = align(&segments);
        if !has_adjacent_group {
            assert!(rows.iter().all(|r| r.status != RowStatus::Modified));
        }
    }
}

#[test]
fn test_documented_examples() {
    let generator = DiffGenerator::default();

    let rows = align(&generator.compute("a\nb\nc", "a\nx\nc", Granularity::Line));
    assert_eq!(
        rows,
        vec![
            AlignedRow::new("a", "a", RowStatus::Unchanged),
            AlignedRow::new("b", "x", RowStatus::Modified),
            AlignedRow::new("c", "c", RowStatus::Unchanged),
        ]
    );

    let rows = align(&generator.compute("a\nb", "a\nb\nc", Granularity::Line));
    assert_eq!(
        rows,
        vec![
            AlignedRow::new("a", "a", RowStatus::Unchanged),
            AlignedRow::new("b", "b", RowStatus::Unchanged),
            AlignedRow::new("", "c", RowStatus::Added),
        ]
    );

    let rows = align(&[DiffSegment::removed("b\nc\n"), DiffSegment::added("x\n")]);
    assert_eq!(
        rows,
        vec![
            AlignedRow::new("b", "x", RowStatus::Modified),
            AlignedRow::new("c", "", RowStatus::Removed),
        ]
    );
}

#[test]
fn test_char_segments_reconstruct_inputs() {
    let generator = DiffGenerator::default();

    for (original, modified) in PAIRS {
        let segments = generator.compute(original, modified, Granularity::Char);

        let left: String = segments
            .iter()
            .filter(|s| s.in_original())
            .map(|s| s.value.as_str())
            .collect();
        let right: String = segments
            .iter()
            .filter(|s| s.in_modified())
            .map(|s| s.value.as_str())
            .collect();

        assert_eq!(&left, original);
        assert_eq!(&right, modified);
    }
}
