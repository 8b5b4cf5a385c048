//! Properties of the layout algorithms over generated rectangles

use hztoolbar::Rect;
use hztoolbar::layout::{GUIDE_EPSILON, GuideSet, Gutters, magnet, make_rows, partition, stack_horizontal, stack_vertical};
use hztoolbar::types::Side;
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500.0..500.0f64, -500.0..500.0f64, 1.0..200.0f64, 1.0..200.0f64)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

/// Rows `100` apart whose shapes overlap heavily, tagged with their row
fn separated_rows() -> impl Strategy<Value = Vec<(usize, Rect)>> {
    prop::collection::vec(prop::collection::vec((0.0..800.0f64, 0.0..5.0f64, 40.0..60.0f64), 1..5), 1..5).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .flat_map(|(row, shapes)| {
                    shapes.into_iter().map(move |(left, dy, height)| {
                        (row, Rect::new(left, row as f64 * 100.0 + dy, 30.0, height))
                    })
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn separated_rows_are_recovered(tagged in separated_rows()) {
        let rects: Vec<Rect> = tagged.iter().map(|(_, r)| *r).collect();
        let rows = make_rows(&rects).unwrap();
        let expected = tagged.iter().map(|(row, _)| row).max().map_or(0, |m| m + 1);
        prop_assert_eq!(rows.len(), expected);
        for (row, members) in rows.iter().enumerate() {
            for &idx in members {
                prop_assert_eq!(tagged[idx].0, row);
            }
        }
    }

    #[test]
    fn clustering_covers_every_index_once(rects in prop::collection::vec(rect_strategy(), 1..30)) {
        let mut seen: Vec<usize> = make_rows(&rects).unwrap().into_iter().flatten().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..rects.len()).collect::<Vec<_>>());
    }

    #[test]
    fn magnet_buckets_are_exclusive(rects in prop::collection::vec(rect_strategy(), 1..20), reference in 0usize..20) {
        let reference = reference % rects.len();
        let buckets = partition(&rects, reference);
        let mut seen: Vec<usize> = [Side::Left, Side::Right, Side::Top, Side::Bottom]
            .iter()
            .flat_map(|&side| buckets.get(side).to_vec())
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..rects.len()).filter(|&i| i != reference).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn magnet_never_moves_the_reference(rects in prop::collection::vec(rect_strategy(), 2..10)) {
        let out = magnet(&rects, 0, Gutters { horizontal: 3.0, vertical: 4.0 });
        prop_assert_eq!(out[0], rects[0]);
        for (before, after) in rects.iter().zip(&out) {
            prop_assert_eq!((before.width, before.height), (after.width, after.height));
        }
    }

    #[test]
    fn stacking_a_singleton_is_a_no_op(rect in rect_strategy(), gutter in 0.0..50.0f64) {
        prop_assert_eq!(stack_horizontal(&[rect], gutter), vec![rect]);
        prop_assert_eq!(stack_vertical(&[rect], gutter), vec![rect]);
    }

    #[test]
    fn stacked_shapes_are_one_gutter_apart(rects in prop::collection::vec(rect_strategy(), 2..10), gutter in 0.0..50.0f64) {
        let mut out = stack_horizontal(&rects, gutter);
        out.sort_by(|a, b| a.left.total_cmp(&b.left));
        for pair in out.windows(2) {
            prop_assert!((pair[1].left - pair[0].right() - gutter).abs() < 1e-9);
            prop_assert_eq!(pair[1].top, pair[0].top);
        }
    }

    #[test]
    fn guide_search_matches_a_linear_scan(
        positions in prop::collection::vec(-1000.0..1000.0f64, 0..20),
        query in -1100.0..1100.0f64,
    ) {
        let guides = GuideSet::new(positions.clone());
        let floor = positions.iter().copied().filter(|&p| p <= query + GUIDE_EPSILON).fold(None, |m: Option<f64>, p| Some(m.map_or(p, |m| m.max(p))));
        let ceiling = positions.iter().copied().filter(|&p| p >= query - GUIDE_EPSILON).fold(None, |m: Option<f64>, p| Some(m.map_or(p, |m| m.min(p))));
        prop_assert_eq!(guides.floor(query, GUIDE_EPSILON), floor);
        prop_assert_eq!(guides.ceiling(query, GUIDE_EPSILON), ceiling);
    }
}

#[test]
fn guide_search_examples() {
    let guides = GuideSet::new([0.0, 50.0, 100.0]);
    assert_eq!(guides.floor(60.0, GUIDE_EPSILON), Some(50.0));
    assert_eq!(guides.ceiling(60.0, GUIDE_EPSILON), Some(100.0));
    assert_eq!(guides.floor(50.05, GUIDE_EPSILON), Some(50.0));
    assert_eq!(guides.ceiling(50.05, GUIDE_EPSILON), Some(50.0));
}
