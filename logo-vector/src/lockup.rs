use crate::icon::{icon_bars, icon_outline, IconStyle};
use brand_lib::color::{to_string, BACKGROUND, NAVY};
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

pub const WORDMARK: &str = "BorrowPower";
pub const FONT_FAMILY: &str = "Inter, Segoe UI, Roboto, Helvetica, Arial, sans-serif";
const FONT_SIZE: u32 = 120;
const WIDTH_RATIO: f64 = 1.8;
/// Horizontal space between the icon and the wordmark.
const TEXT_GAP: u32 = 24;
/// The wordmark baseline sits this far below the vertical center.
const TEXT_DROP: f64 = 32.0;

pub fn lockup_width(height: u32) -> u32 {
    (height as f64 * WIDTH_RATIO) as u32
}

/// Icon on the left, wordmark on the right. The font is not embedded.
pub fn lockup_document(height: u32) -> Document {
    let icon = IconStyle::default();
    let width = lockup_width(height);
    // floor division, so a short canvas pushes the icon up rather than rounding toward zero
    let icon_offset = (height as i64 - icon.size as i64).div_euclid(2);

    let group = icon_bars(&icon).into_iter().fold(
        Group::new()
            .set("transform", format!("translate(0, {})", icon_offset))
            .add(icon_outline(&icon)),
        |group, bar| group.add(bar),
    );

    let text = Text::new(WORDMARK)
        .set("x", icon.size + TEXT_GAP)
        .set("y", height as f64 / 2.0 + TEXT_DROP)
        .set("font-size", FONT_SIZE)
        .set("font-family", FONT_FAMILY)
        .set("fill", to_string(&NAVY))
        .set("font-weight", 700);

    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", to_string(&BACKGROUND)),
        )
        .add(group)
        .add(text)
}
