use super::*;
use crate::{AbsoluteLayoutSpec, Anchor, AnchorOffset, LayoutError};

fn dim(w: f64, h: f64) -> Dimension {
    Dimension::new(w, h).unwrap()
}

fn coverage(anchor: Anchor, offset: Offset, coverage: f64) -> LayoutSpec {
    CoverageLayoutSpec::new(AnchorOffset::aligned(anchor, offset), coverage)
        .unwrap()
        .into()
}

#[test]
fn half_coverage_top_left() {
    let l = resolve(
        dim(4000.0, 2000.0),
        dim(1000.0, 500.0),
        &coverage(Anchor::TOP_LEFT, Offset::ZERO, 0.5),
    )
    .unwrap();
    assert_eq!(l, Layout::new(dim(2000.0, 1000.0), Offset::new(0.0, 0.0)));
}

#[test]
fn half_coverage_bottom_right() {
    let l = resolve(
        dim(4000.0, 2000.0),
        dim(1000.0, 500.0),
        &coverage(Anchor::BOTTOM_RIGHT, Offset::ZERO, 0.5),
    )
    .unwrap();
    assert_eq!(l, Layout::new(dim(2000.0, 1000.0), Offset::new(2000.0, 1000.0)));
}

#[test]
fn negative_margin_at_top_left_clamps_to_origin() {
    let l = resolve(
        dim(1920.0, 1080.0),
        dim(640.0, 480.0),
        &coverage(Anchor::TOP_LEFT, Offset::new(-20.0, -20.0), 0.2),
    )
    .unwrap();
    assert_eq!(l, Layout::new(dim(384.0, 288.0), Offset::new(0.0, 0.0)));
}

#[test]
fn height_overflow_shrinks_to_canvas_height() {
    let l = resolve(
        dim(1920.0, 1080.0),
        dim(640.0, 480.0),
        &coverage(Anchor::BOTTOM_RIGHT, Offset::new(-20.0, -20.0), 0.8),
    )
    .unwrap();
    assert_eq!(l, Layout::new(dim(1440.0, 1080.0), Offset::new(460.0, 0.0)));
}

#[test]
fn absolute_keeps_native_size() {
    let spec: LayoutSpec = AbsoluteLayoutSpec::new(AnchorOffset::aligned(
        Anchor::TOP_RIGHT,
        Offset::new(-20.0, 20.0),
    ))
    .into();
    let l = resolve(dim(1920.0, 1080.0), dim(200.0, 80.0), &spec).unwrap();
    assert_eq!(l, Layout::new(dim(200.0, 80.0), Offset::new(1700.0, 20.0)));
}

#[test]
fn absolute_larger_than_canvas_is_not_scaled() {
    let spec: LayoutSpec =
        AbsoluteLayoutSpec::new(AnchorOffset::aligned(Anchor::CENTER, Offset::ZERO)).into();
    let l = resolve(dim(100.0, 100.0), dim(300.0, 50.0), &spec).unwrap();
    assert_eq!(l.dimension, dim(300.0, 50.0));
    assert_eq!(l.offset, Offset::new(0.0, 25.0));
}

#[test]
fn coverage_preserves_aspect_and_respects_canvas_height() {
    let canvases = [dim(1920.0, 1080.0), dim(1080.0, 1920.0), dim(640.0, 640.0)];
    let medias = [dim(640.0, 480.0), dim(1920.0, 1080.0), dim(300.0, 900.0), dim(17.0, 3.0)];
    let coverages = [0.05, 0.2, 0.5, 0.8, 1.0];
    for canvas in canvases {
        for media in medias {
            for c in coverages {
                let spec = coverage(Anchor::BOTTOM_RIGHT, Offset::new(-20.0, -20.0), c);
                let l = resolve(canvas, media, &spec).unwrap();
                let ratio = l.dimension.aspect_ratio() / media.aspect_ratio();
                assert!((ratio - 1.0).abs() < 1e-9, "{media} on {canvas} at {c}");
                assert!(l.dimension.height() <= canvas.height(), "{media} on {canvas} at {c}");
                assert!(
                    l.dimension.width() <= canvas.width() * c + 1e-9,
                    "{media} on {canvas} at {c}"
                );
                assert!(l.offset.x >= 0.0 && l.offset.y >= 0.0);
            }
        }
    }
}

#[test]
fn multi_resolves_each_shape_independently_in_order() {
    let canvas = dim(1920.0, 1080.0);
    let big = coverage(Anchor::BOTTOM_RIGHT, Offset::new(-20.0, -20.0), 1.0);
    let small = coverage(Anchor::TOP_LEFT, Offset::new(-20.0, -20.0), 0.2);
    let multi =
        resolve_multi(canvas, &[(dim(1280.0, 720.0), big), (dim(640.0, 480.0), small)]).unwrap();

    assert_eq!(multi.shapes().len(), 2);
    assert_eq!(multi.shapes()[0], resolve(canvas, dim(1280.0, 720.0), &big).unwrap());
    assert_eq!(multi.shapes()[1], resolve(canvas, dim(640.0, 480.0), &small).unwrap());
    assert_eq!(multi.shapes()[1].dimension, dim(384.0, 288.0));
}

#[test]
fn multi_accepts_homogeneous_spec_lists() {
    let canvas = dim(1000.0, 1000.0);
    let spec = AbsoluteLayoutSpec::new(AnchorOffset::aligned(Anchor::TOP_LEFT, Offset::ZERO));
    let multi =
        resolve_multi(canvas, &[(dim(10.0, 10.0), spec), (dim(20.0, 5.0), spec)]).unwrap();
    assert_eq!(multi.shapes()[1].dimension, dim(20.0, 5.0));

    let empty: &[(Dimension, LayoutSpec)] = &[];
    assert!(resolve_multi(canvas, empty).unwrap().shapes().is_empty());
}

#[test]
fn two_shape_keeps_input_order() {
    let canvas = dim(1920.0, 1080.0);
    let upper = CoverageLayoutSpec::new(
        AnchorOffset::aligned(Anchor::TOP_LEFT, Offset::new(20.0, 20.0)),
        0.25,
    )
    .unwrap();
    let lower = CoverageLayoutSpec::new(AnchorOffset::aligned(Anchor::CENTER, Offset::ZERO), 1.0)
        .unwrap();
    let two =
        resolve_two_shape(canvas, dim(640.0, 360.0), upper, dim(1920.0, 1080.0), lower).unwrap();

    assert_eq!(two.canvas, canvas);
    assert_eq!(two.upper, Layout::new(dim(480.0, 270.0), Offset::new(20.0, 20.0)));
    assert_eq!(two.lower, Layout::new(dim(1920.0, 1080.0), Offset::ZERO));
}

#[test]
fn degenerate_media_aspect_is_reported() {
    let canvas = dim(1.0, 1.0);
    let media = dim(1e300, 1e-300);
    for spec in [
        coverage(Anchor::TOP_LEFT, Offset::ZERO, 1.0),
        coverage(Anchor::CENTER, Offset::ZERO, 0.5),
    ] {
        let err = resolve(canvas, media, &spec).unwrap_err();
        assert!(matches!(err, LayoutError::Validation(_)), "{err}");
    }
    let err = resolve(canvas, dim(1e-300, 1e300), &coverage(Anchor::TOP_LEFT, Offset::ZERO, 1.0))
        .unwrap_err();
    assert!(matches!(err, LayoutError::Validation(_)), "{err}");

    let shapes = [
        (dim(10.0, 10.0), coverage(Anchor::TOP_LEFT, Offset::ZERO, 1.0)),
        (media, coverage(Anchor::TOP_LEFT, Offset::ZERO, 1.0)),
    ];
    assert!(resolve_multi(canvas, &shapes).is_err());
}

#[test]
fn layout_rect_spans_offset_and_dimension() {
    let l = Layout::new(dim(384.0, 288.0), Offset::new(10.0, 20.0));
    assert_eq!(l.rect(), kurbo::Rect::new(10.0, 20.0, 394.0, 308.0));
}
