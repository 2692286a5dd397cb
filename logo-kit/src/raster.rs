use crate::error::{KitError, Result};
use brand_lib::color::{sRGB, with_alpha, BACKGROUND, TEAL, TEAL_DARK};
use brand_lib::geometry::{inset_polygon, pixel_house, BarLayout, INSET_SCALE};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use itertools::Itertools;
use std::path::Path;

/// Smallest canvas the kit renders. The gap between bars is 1 px here and truncates to zero
/// below 17 px.
pub const MIN_SIZE: u32 = 32;

fn rgba(c: &sRGB) -> Rgba<u8> {
    Rgba(with_alpha(c))
}

fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    let poly = points
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect_vec();
    draw_polygon_mut(img, &poly, color);
}

/// Filled rounded rectangle covering `top_left..=bottom_right`, corners included.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    r: i32,
    color: Rgba<u8>,
) {
    let w = (x1 - x0 + 1) as u32;
    let h = (y1 - y0 + 1) as u32;
    if r <= 0 {
        draw_filled_rect_mut(img, Rect::at(x0, y0).of_size(w, h), color);
        return;
    }
    let d = 2 * r as u32;
    draw_filled_rect_mut(img, Rect::at(x0 + r, y0).of_size(w - d, h), color);
    draw_filled_rect_mut(img, Rect::at(x0, y0 + r).of_size(w, h - d), color);
    for center in [
        (x0 + r, y0 + r),
        (x1 - r, y0 + r),
        (x0 + r, y1 - r),
        (x1 - r, y1 - r),
    ] {
        draw_filled_circle_mut(img, center, r, color);
    }
}

/// Raster icon on an opaque square canvas.
///
/// There is no stroke primitive here: the outline is the house filled in teal with a
/// centroid-scaled copy filled in the background color on top. The bars are drawn last
/// and overlap the bottom of the outline. Each bar is `width` columns wide, so the drawn
/// gap between neighbours equals the layout gap.
pub fn raster_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, rgba(&BACKGROUND));

    let outer = pixel_house(size);
    fill_polygon(&mut img, &outer, rgba(&TEAL));
    let inner = inset_polygon(&outer, INSET_SCALE);
    fill_polygon(&mut img, &inner, rgba(&BACKGROUND));

    let layout = BarLayout::pixels(size);
    let r = layout.corner_radius();
    for bar in layout.bars.iter() {
        fill_rounded_rect(
            &mut img,
            (bar.x, bar.top(layout.baseline)),
            (bar.x + layout.width - 1, layout.baseline),
            r,
            rgba(&TEAL_DARK),
        );
    }
    img
}

pub fn save_png<T: AsRef<Path>>(path: T, size: u32) -> Result<()> {
    let path = path.as_ref();
    if size < MIN_SIZE {
        return Err(KitError::Config(format!(
            "raster size {} is below the minimum of {}",
            size, MIN_SIZE
        )));
    }
    log::debug!("icon {}px -> {}", size, path.display());
    raster_icon(size).save(path).map_err(KitError::image(path))
}
