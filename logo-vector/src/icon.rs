use brand_lib::color::{sRGB, to_string, TEAL};
use brand_lib::geometry::{scaled_house, BarLayout};
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};
use svg::Document;

#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    pub size: u32,
    pub stroke: u32,
    pub bar_color: sRGB,
    pub stroke_color: sRGB,
    pub background: Option<sRGB>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: 256,
            stroke: 24,
            bar_color: TEAL,
            stroke_color: TEAL,
            background: None,
        }
    }
}

impl IconStyle {
    pub fn sized(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

/// Size 64, default stroke.
pub fn favicon_style() -> IconStyle {
    IconStyle::sized(64)
}

pub fn outline_data(size: f64) -> Data {
    let [apex, roof_left, bottom_left, bottom_right, roof_right] = scaled_house(size);
    Data::new()
        .move_to(apex)
        .line_to(roof_left)
        .line_to(bottom_left)
        .line_to(bottom_right)
        .line_to(roof_right)
        .close()
}

/// Rounded rectangle with its top-left corner at `(x, y)`, drawn with relative moves.
pub fn rounded_bar_data(x: f64, y: f64, w: f64, h: f64, r: f64) -> Data {
    Data::new()
        .move_to((x + r, y))
        .horizontal_line_by(w - 2.0 * r)
        .elliptical_arc_by((r, r, 0, 0, 1, r, r))
        .vertical_line_by(h - 2.0 * r)
        .elliptical_arc_by((r, r, 0, 0, 1, -r, r))
        .horizontal_line_by(-w + 2.0 * r)
        .elliptical_arc_by((r, r, 0, 0, 1, -r, -r))
        .vertical_line_by(-h + 2.0 * r)
        .elliptical_arc_by((r, r, 0, 0, 1, r, -r))
        .close()
}

pub fn bar_data(size: f64) -> Vec<Data> {
    let layout = BarLayout::scaled(size);
    let r = layout.corner_radius();
    layout
        .bars
        .iter()
        .map(|bar| {
            rounded_bar_data(
                bar.x,
                bar.top(layout.baseline),
                layout.width,
                bar.height,
                r,
            )
        })
        .collect()
}

pub fn icon_outline(style: &IconStyle) -> Path {
    Path::new()
        .set("d", outline_data(style.size as f64))
        .set("fill", "none")
        .set("stroke", to_string(&style.stroke_color))
        .set("stroke-width", style.stroke)
        .set("stroke-linejoin", "round")
        .set("stroke-linecap", "round")
}

pub fn icon_bars(style: &IconStyle) -> Vec<Path> {
    bar_data(style.size as f64)
        .into_iter()
        .map(|data| {
            Path::new()
                .set("d", data)
                .set("fill", to_string(&style.bar_color))
        })
        .collect()
}

pub fn icon_document(style: &IconStyle) -> Document {
    let s = style.size;
    let mut document = Document::new()
        .set("width", s)
        .set("height", s)
        .set("viewBox", (0, 0, s, s));
    if let Some(bg) = style.background {
        document = document.add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", to_string(&bg)),
        );
    }
    icon_bars(style)
        .into_iter()
        .fold(document.add(icon_outline(style)), |doc, bar| doc.add(bar))
}
