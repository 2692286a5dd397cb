use itertools::Itertools;
use std::ops::{Add, Sub};

/// House silhouette in the unit square: apex, roof left, bottom left, bottom right, roof right.
pub const HOUSE: [(f64, f64); 5] = [
    (0.5, 0.12),
    (0.18, 0.34),
    (0.18, 0.86),
    (0.82, 0.86),
    (0.82, 0.34),
];

// Bar ratios, all fractions of the canvas size.
pub const BASELINE: f64 = 0.80;
pub const BAR_WIDTH: f64 = 0.08;
pub const BAR_GAP: f64 = 0.06;
pub const BAR_CENTER: f64 = 0.40;
pub const BAR_HEIGHTS: [f64; 3] = [0.22, 0.34, 0.48];

/// How far the raster cut-out is pulled toward the centroid.
pub const INSET_SCALE: f64 = 0.82;

pub fn scaled_house(size: f64) -> [(f64, f64); 5] {
    HOUSE.map(|(x, y)| (x * size, y * size))
}

/// House corners on the pixel grid. Truncation, not rounding.
pub fn pixel_house(size: u32) -> [(i32, i32); 5] {
    let s = size as f64;
    HOUSE.map(|(x, y)| ((x * s) as i32, (y * s) as i32))
}

/// Pulls every point toward the centroid of the polygon.
///
/// The centroid is the plain mean of the vertices. On a non-regular polygon the distance
/// between the two outlines is not constant around the perimeter.
pub fn inset_polygon(points: &[(i32, i32)], scale: f64) -> Vec<(i32, i32)> {
    let n = points.len() as f64;
    let cx = points.iter().map(|&(x, _)| x as f64).sum::<f64>() / n;
    let cy = points.iter().map(|&(_, y)| y as f64).sum::<f64>() / n;
    points
        .iter()
        .map(|&(x, y)| {
            (
                (cx + (x as f64 - cx) * scale) as i32,
                (cy + (y as f64 - cy) * scale) as i32,
            )
        })
        .collect_vec()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar<T> {
    pub x: T,
    pub height: T,
}

impl<T: Copy + Sub<Output = T>> Bar<T> {
    pub fn top(&self, baseline: T) -> T {
        baseline - self.height
    }
}

/// The three ascending bars, sharing one baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout<T> {
    pub baseline: T,
    pub width: T,
    pub gap: T,
    pub bars: [Bar<T>; 3],
}

impl BarLayout<f64> {
    /// Exact layout for vector output.
    pub fn scaled(size: f64) -> Self {
        let width = BAR_WIDTH * size;
        let gap = BAR_GAP * size;
        let center = BAR_CENTER * size;
        let xs = [center - width - gap, center, center + width + gap];
        Self {
            baseline: BASELINE * size,
            width,
            gap,
            bars: [0, 1, 2].map(|i| Bar {
                x: xs[i],
                height: BAR_HEIGHTS[i] * size,
            }),
        }
    }

    pub fn corner_radius(&self) -> f64 {
        self.width / 2.8
    }
}

impl BarLayout<i32> {
    /// Layout snapped to the pixel grid.
    ///
    /// Width and gap are truncated first and the outer bar positions are computed from the
    /// truncated values, so the outer bars can drift up to a few pixels from `scaled(size)`.
    pub fn pixels(size: u32) -> Self {
        let s = size as f64;
        let width = (BAR_WIDTH * s) as i32;
        let gap = (BAR_GAP * s) as i32;
        let center = BAR_CENTER * s;
        let step = (width + gap) as f64;
        let xs = [
            (center - step) as i32,
            center as i32,
            (center + step) as i32,
        ];
        Self {
            baseline: (BASELINE * s) as i32,
            width,
            gap,
            bars: [0, 1, 2].map(|i| Bar {
                x: xs[i],
                height: (BAR_HEIGHTS[i] * s) as i32,
            }),
        }
    }

    pub fn corner_radius(&self) -> i32 {
        self.width / 3
    }
}

impl<T: Copy + Add<Output = T> + Sub<Output = T>> BarLayout<T> {
    /// Free space between each bar's right edge and the next bar's left edge.
    pub fn spacing(&self) -> Vec<T> {
        self.bars
            .iter()
            .tuple_windows()
            .map(|(a, b)| b.x - (a.x + self.width))
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const PNG_SIZES: [u32; 8] = [32, 48, 64, 128, 180, 192, 256, 512];

    #[test]
    fn test_pixels_512() {
        let layout = BarLayout::pixels(512);
        assert_eq!(layout.baseline, 409);
        assert_eq!(layout.width, 40);
        assert_eq!(layout.gap, 30);
        assert_eq!(layout.corner_radius(), 13);
        let heights = layout.bars.map(|b| b.height);
        assert_eq!(heights, [112, 174, 245]);
        let xs = layout.bars.map(|b| b.x);
        assert_eq!(xs, [134, 204, 274]);
    }

    #[test]
    fn test_scaled_256() {
        let layout = BarLayout::scaled(256.0);
        let eps = 1e-9;
        assert_abs_diff_eq!(layout.baseline, 204.8, epsilon = eps);
        assert_abs_diff_eq!(layout.width, 20.48, epsilon = eps);
        assert_abs_diff_eq!(layout.gap, 15.36, epsilon = eps);
        assert_abs_diff_eq!(layout.bars[0].x, 66.56, epsilon = eps);
        assert_abs_diff_eq!(layout.bars[2].x, 138.24, epsilon = eps);
        assert_abs_diff_eq!(layout.bars[2].top(layout.baseline), 81.92, epsilon = eps);
        assert_abs_diff_eq!(layout.corner_radius(), 20.48 / 2.8, epsilon = eps);
    }

    #[test]
    fn test_bars_ascend_and_never_overlap() {
        for size in 1..=1024 {
            let layout = BarLayout::scaled(size as f64);
            let [a, b, c] = layout.bars;
            assert!(a.height < b.height && b.height < c.height, "size {}", size);
            for space in layout.spacing() {
                assert!(space > 0.0, "size {}", size);
                assert_abs_diff_eq!(space, layout.gap, epsilon = 1e-9);
            }
        }
        for size in PNG_SIZES {
            let layout = BarLayout::pixels(size);
            let [a, b, c] = layout.bars;
            assert!(a.height < b.height && b.height < c.height, "size {}", size);
            assert!(layout.spacing().iter().all(|&space| space > 0), "size {}", size);
        }
    }

    #[test]
    fn test_pixel_layout_tracks_exact_layout() {
        for size in PNG_SIZES {
            let exact = BarLayout::scaled(size as f64);
            let snapped = BarLayout::pixels(size);
            assert!((exact.baseline - snapped.baseline as f64).abs() < 1.0);
            assert!((exact.bars[1].x - snapped.bars[1].x as f64).abs() < 1.0);
            for (e, p) in exact.bars.iter().zip(snapped.bars.iter()) {
                // center, width and gap each lose less than a pixel to truncation
                assert!((e.x - p.x as f64).abs() < 3.0, "size {}", size);
                assert!((e.height - p.height as f64).abs() < 1.0, "size {}", size);
            }
        }
    }

    #[test]
    fn test_house_keeps_shape() {
        for size in [1.0, 64.0, 256.0, 1000.0] {
            let pts = scaled_house(size);
            for (p, n) in pts.iter().zip(HOUSE.iter()) {
                assert_abs_diff_eq!(p.0 / size, n.0, epsilon = 1e-12);
                assert_abs_diff_eq!(p.1 / size, n.1, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inset_polygon() {
        let outer = pixel_house(512);
        assert_eq!(outer, [(256, 61), (92, 174), (92, 440), (419, 440), (419, 174)]);
        let inner = inset_polygon(&outer, INSET_SCALE);
        assert_eq!(inner.len(), 5);
        // centroid is (255.6, 257.8)
        assert_eq!(inner[0], (255, 96));
        assert_eq!(inner[2], (121, 407));
        for (o, i) in outer.iter().zip(inner.iter()) {
            assert!((o.0 - i.0).abs() + (o.1 - i.1).abs() > 0);
        }
    }
}
