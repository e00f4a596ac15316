use blockfill::block::{build, build_block, BlockSpec, BlockStyle, HeaderStyle};
use blockfill::document::{assemble, assemble_document, Separator};
use blockfill::error::BlockfillError;
use blockfill::filler::FillerStyle;
use blockfill::preset::Preset;
use blockfill::wrap::wrap;
use unicode_width::UnicodeWidthStr;

fn points(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("point {}", i)).collect()
}

fn styles() -> Vec<BlockStyle> {
    let mut all: Vec<BlockStyle> = Preset::all().iter().map(|p| p.style()).collect();
    for header_style in [HeaderStyle::Plain, HeaderStyle::Rule, HeaderStyle::Numbered] {
        for filler_style in [
            FillerStyle::Comment,
            FillerStyle::DashNumbered,
            FillerStyle::Template("pad {n:04}".to_string()),
        ] {
            for wrap_width in [None, Some(4), Some(30)] {
                all.push(BlockStyle {
                    header_style,
                    filler_style: filler_style.clone(),
                    wrap_width,
                    ..BlockStyle::default()
                });
            }
        }
    }
    all
}

fn header_len(style: &BlockStyle) -> usize {
    match style.header_style {
        HeaderStyle::Plain => 1,
        HeaderStyle::Rule | HeaderStyle::Numbered => 2,
    }
}

#[test]
fn every_block_has_exactly_target_lines() {
    for style in styles() {
        for target in 1..=12 {
            for count in 0..=8 {
                let lines = build("Title", &points(count), target, &style).unwrap();
                assert_eq!(
                    lines.len(),
                    target,
                    "style {:?}, target {}, {} points",
                    style,
                    target,
                    count
                );
            }
        }
    }
}

#[test]
fn building_twice_is_byte_identical() {
    let long = vec![
        "A long point that certainly needs to be wrapped more than once".to_string(),
        "Second\nwith a break".to_string(),
        String::new(),
    ];
    for style in styles() {
        let first = build("Same", &long, 15, &style).unwrap();
        let second = build("Same", &long, 15, &style).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn unwrapped_points_appear_verbatim_in_order() {
    for header_style in [HeaderStyle::Plain, HeaderStyle::Rule] {
        let style = BlockStyle {
            header_style,
            ..BlockStyle::default()
        };
        let h = header_len(&style);
        for count in 0..=6 {
            let target = h + count + 2;
            let lines = build("T", &points(count), target, &style).unwrap();
            assert_eq!(&lines[h..h + count], points(count).as_slice());
        }
    }
}

#[test]
fn overflowing_points_are_cut_from_the_tail_without_filler() {
    for header_style in [HeaderStyle::Plain, HeaderStyle::Rule] {
        let style = BlockStyle {
            header_style,
            ..BlockStyle::default()
        };
        let h = header_len(&style);
        for target in h + 1..=h + 4 {
            let all = points(target + 3);
            let lines = build("T", &all, target, &style).unwrap();
            let kept = target - h;
            assert_eq!(&lines[h..], &all[..kept]);
            assert!(lines.iter().all(|l| !l.starts_with("// PADDING")));
        }
    }
}

#[test]
fn header_longer_than_target_is_cut() {
    let style = BlockStyle {
        header_style: HeaderStyle::Rule,
        ..BlockStyle::default()
    };
    let spec = BlockSpec::new("T", points(3), 1, style);
    let block = build_block(&spec, 0).unwrap();
    assert_eq!(block.into_lines(), vec!["### T".to_string()]);
}

#[test]
fn zero_target_and_zero_wrap_width_are_rejected() {
    let err = build("T", &points(1), 0, &BlockStyle::default()).unwrap_err();
    assert!(matches!(err, BlockfillError::InvalidTargetLength(0)));

    let style = BlockStyle {
        wrap_width: Some(0),
        ..BlockStyle::default()
    };
    let err = build("T", &points(1), 5, &style).unwrap_err();
    assert!(matches!(err, BlockfillError::InvalidWrapWidth(0)));
}

#[test]
fn worked_example() {
    let lines = build(
        "T",
        &["a".to_string(), "b".to_string()],
        5,
        &BlockStyle::default(),
    )
    .unwrap();
    assert_eq!(
        lines,
        vec![
            "### T",
            "a",
            "b",
            "// PADDING-LINE-004",
            "// PADDING-LINE-005"
        ]
    );
}

#[test]
fn numbering_increases_by_one_across_blocks() {
    let numbered = Preset::Numbered.style();
    let wrapped = BlockStyle {
        wrap_width: Some(10),
        ..numbered.clone()
    };
    let specs = vec![
        BlockSpec::new("One", points(2), 6, numbered.clone()),
        BlockSpec::new("Plain", points(2), 4, BlockStyle::default()),
        BlockSpec::new("Two", points(9), 5, numbered.clone()),
        BlockSpec::new("Tiny", points(1), 1, numbered.clone()),
        BlockSpec::new(
            "Three",
            vec!["some words that wrap over lines".to_string()],
            8,
            wrapped,
        ),
    ];
    let document = assemble(&specs, &Separator::Newline).unwrap();

    let indexes: Vec<usize> = document
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix('[')?;
            let end = rest.find(']')?;
            rest[..end].parse().ok()
        })
        .collect();
    let expected: Vec<usize> = (1..=indexes.len()).collect();
    assert_eq!(indexes, expected);
    // 4 + 3 + 0 + 6 numbered slots
    assert_eq!(indexes.len(), 13);
}

#[test]
fn assembly_only_inserts_separators() {
    let specs = vec![
        BlockSpec::new("A", points(2), 4, Preset::Changelog.style()),
        BlockSpec::new("B", points(5), 3, Preset::Detail.style()),
        BlockSpec::new("C", points(1), 6, Preset::Numbered.style()),
    ];
    for separator in [
        Separator::Newline,
        Separator::BlankLine,
        Separator::None,
        Separator::Custom("====".to_string()),
        Separator::Custom("two\nlines".to_string()),
    ] {
        let document = assemble_document(&specs, separator.clone()).unwrap();
        for (block, spec) in document.blocks().iter().zip(&specs) {
            assert_eq!(block.len(), spec.target_lines);
        }

        let rendered = document.render();
        let lines: Vec<&str> = rendered.split('\n').collect();
        let separator_lines: Vec<&str> = match &separator {
            Separator::Newline | Separator::None => vec![],
            Separator::BlankLine => vec![""],
            Separator::Custom(text) => text.split('\n').collect(),
        };
        let mut expected: Vec<&str> = Vec::new();
        for (i, block) in document.blocks().iter().enumerate() {
            if i > 0 {
                expected.extend(&separator_lines);
            }
            expected.extend(block.lines());
        }
        assert_eq!(lines, expected, "{:?}", separator);
        assert_eq!(
            lines.len(),
            4 + 3 + 6 + 2 * separator_lines.len(),
            "{:?}",
            separator
        );
    }
}

#[test]
fn wrapped_lines_stay_within_width() {
    let text = "Greedy wrapping packs words 日本語テキスト onto each line until the next \
                one would overflow, supercalifragilistic tokens stay whole";
    for width in 1..=40 {
        let lines: Vec<String> = wrap(text, width).unwrap().collect();
        for line in &lines {
            assert!(
                line.width() <= width || !line.contains(' '),
                "{:?} exceeds {}",
                line,
                width
            );
        }
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(lines.join(" "), normalized);
    }
}

#[test]
fn wrap_example() {
    let lines: Vec<String> = wrap("alpha beta gamma", 7).unwrap().collect();
    assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
}
