use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Affine, Arc, BezPath, Point};

use crate::error::{RoundifyError, RoundifyResult};

const ARC_TOLERANCE: f64 = 0.01;

/// Build the four corner clip paths for an image of `width` x `height` with
/// the given corner radius.
///
/// Each path is the region a corner mask must make transparent: the square of
/// side `radius` flush with the image corner, minus the quarter of the corner
/// circle inscribed in it. The canonical path is built once for the top-left
/// corner and the other three are the same shape under a rotation about its
/// bounding-box center plus a translation, so all four are congruent by
/// construction.
///
/// Paths are biased 0.5px outward past the image edges; the mirrored corners
/// compensate with a +1 offset so they sit flush against the far edges. A
/// radius of 0 yields degenerate zero-area paths, and a radius of at least
/// half the smaller dimension yields overlapping paths; both rasterize
/// correctly under a union fill.
pub fn corner_paths(width: u32, height: u32, radius: f64) -> RoundifyResult<[BezPath; 4]> {
    if width == 0 || height == 0 {
        return Err(RoundifyError::invalid_dimension(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(RoundifyError::invalid_radius(format!(
            "corner radius must be finite and non-negative, got {radius}"
        )));
    }

    let top_left = canonical_corner(radius);

    // The canonical bounding box is [-0.5, radius - 0.5] on both axes; any
    // quarter-turn about its center maps the box onto itself, so translation
    // offsets only need to account for the box landing on the far edges.
    let center = Point::new((radius - 1.0) * 0.5, (radius - 1.0) * 0.5);
    let right = f64::from(width) - radius + 1.0;
    let bottom = f64::from(height) - radius + 1.0;

    let top_right = Affine::translate((right, 0.0)) * Affine::rotate_about(FRAC_PI_2, center);
    let bottom_left = Affine::translate((0.0, bottom)) * Affine::rotate_about(-FRAC_PI_2, center);
    let bottom_right = Affine::translate((right, bottom)) * Affine::rotate_about(PI, center);

    Ok([
        top_left.clone(),
        top_right * top_left.clone(),
        bottom_left * top_left.clone(),
        bottom_right * top_left,
    ])
}

/// Top-left corner shape: square minus inscribed quarter circle, traced as a
/// single closed path. Starts at the outer corner, runs along the top edge to
/// where the circle meets it, follows the arc down to the left edge, closes.
fn canonical_corner(radius: f64) -> BezPath {
    let inner = radius - 0.5;

    let mut path = BezPath::new();
    path.move_to((-0.5, -0.5));
    path.line_to((inner, -0.5));
    let arc = Arc::new(
        (inner, inner),
        (radius, radius),
        -FRAC_PI_2,
        -FRAC_PI_2,
        0.0,
    );
    arc.to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p3| path.curve_to(p1, p2, p3));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;

    use super::*;

    fn area(path: &BezPath) -> f64 {
        path.area().abs()
    }

    #[test]
    fn returns_four_congruent_paths() {
        for (w, h, r) in [(300u32, 300u32, 15.0), (64, 48, 10.0), (100, 200, 50.0)] {
            let paths = corner_paths(w, h, r).unwrap();
            assert_eq!(paths.len(), 4);

            let a0 = area(&paths[0]);
            let b0 = paths[0].bounding_box();
            for p in &paths[1..] {
                assert!((area(p) - a0).abs() < 1e-6);
                let b = p.bounding_box();
                assert!((b.width() - b0.width()).abs() < 1e-6);
                assert!((b.height() - b0.height()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn corner_area_is_square_minus_quarter_circle() {
        let r = 15.0;
        let paths = corner_paths(300, 300, r).unwrap();
        let expected = r * r * (1.0 - PI / 4.0);
        assert!((area(&paths[0]) - expected).abs() < 0.05);
    }

    #[test]
    fn paths_cover_the_four_corner_regions() {
        let (w, h, r) = (300.0f64, 200.0f64, 15.0f64);
        let paths = corner_paths(300, 200, r).unwrap();

        let expected = [
            kurbo::Rect::new(-0.5, -0.5, r - 0.5, r - 0.5),
            kurbo::Rect::new(w - r + 0.5, -0.5, w + 0.5, r - 0.5),
            kurbo::Rect::new(-0.5, h - r + 0.5, r - 0.5, h + 0.5),
            kurbo::Rect::new(w - r + 0.5, h - r + 0.5, w + 0.5, h + 0.5),
        ];
        for (path, want) in paths.iter().zip(expected) {
            let got = path.bounding_box();
            assert!((got.x0 - want.x0).abs() < 1e-6, "{got:?} vs {want:?}");
            assert!((got.y0 - want.y0).abs() < 1e-6, "{got:?} vs {want:?}");
            assert!((got.x1 - want.x1).abs() < 1e-6, "{got:?} vs {want:?}");
            assert!((got.y1 - want.y1).abs() < 1e-6, "{got:?} vs {want:?}");
        }
    }

    #[test]
    fn radius_zero_is_degenerate() {
        let paths = corner_paths(32, 32, 0.0).unwrap();
        for p in &paths {
            assert!(area(p) < 1e-9);
        }
    }

    #[test]
    fn oversized_radius_still_builds() {
        // Corners overlap once the radius passes half the smaller dimension;
        // the union fill keeps that correct downstream.
        let paths = corner_paths(32, 32, 32.0).unwrap();
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            corner_paths(0, 10, 4.0),
            Err(RoundifyError::InvalidDimension(_))
        ));
        assert!(matches!(
            corner_paths(10, 0, 4.0),
            Err(RoundifyError::InvalidDimension(_))
        ));
        assert!(matches!(
            corner_paths(10, 10, -1.0),
            Err(RoundifyError::InvalidRadius(_))
        ));
        assert!(matches!(
            corner_paths(10, 10, f64::NAN),
            Err(RoundifyError::InvalidRadius(_))
        ));
    }
}
