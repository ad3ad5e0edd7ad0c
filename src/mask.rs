use crate::{
    buffer::{PixelBuffer, mul_div255},
    corners::corner_paths,
    error::{RoundifyError, RoundifyResult},
};

/// Punch transparent rounded corners into `frame` in place.
///
/// The four corner paths are rasterized as one union fill and every covered
/// pixel has its alpha overwritten proportionally to coverage:
/// `alpha' = alpha * (1 - coverage)`. This is a replace rule, not source-over
/// blending — blending a transparent fill would leave the buffer untouched.
/// Antialiased edge pixels scale toward transparent by their fractional
/// coverage; only full- and zero-coverage outcomes are contractual.
pub fn apply_rounded_corners(frame: &mut PixelBuffer, radius: f64) -> RoundifyResult<()> {
    frame.validate()?;
    let paths = corner_paths(frame.width, frame.height, radius)?;
    if radius == 0.0 {
        return Ok(());
    }

    let coverage = rasterize_coverage(frame.width, frame.height, &paths)?;
    tracing::debug!(
        width = frame.width,
        height = frame.height,
        radius,
        covered = coverage.iter().filter(|&&c| c != 0).count(),
        "applying corner mask"
    );

    let premultiplied = frame.premultiplied;
    for (px, &cov) in frame.data.chunks_exact_mut(4).zip(coverage.iter()) {
        if cov == 0 {
            continue;
        }
        let keep = 255 - u16::from(cov);
        px[3] = mul_div255(u16::from(px[3]), keep);
        if premultiplied {
            px[0] = mul_div255(u16::from(px[0]), keep);
            px[1] = mul_div255(u16::from(px[1]), keep);
            px[2] = mul_div255(u16::from(px[2]), keep);
        }
    }
    Ok(())
}

/// Rasterize the corner paths into a per-pixel coverage mask (0..=255).
///
/// Fills all four paths opaque white into one transparent surface; with a
/// premultiplied white paint the alpha channel is exactly the accumulated
/// coverage, and overlapping corners saturate rather than double-count.
fn rasterize_coverage(
    width: u32,
    height: u32,
    paths: &[kurbo::BezPath; 4],
) -> RoundifyResult<Vec<u8>> {
    let w: u16 = width
        .try_into()
        .map_err(|_| RoundifyError::invalid_dimension("mask width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| RoundifyError::invalid_dimension("mask height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    for path in paths {
        ctx.fill_path(&bezpath_to_cpu(path));
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
