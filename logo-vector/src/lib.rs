mod icon;
mod lockup;

pub use icon::{
    bar_data, favicon_style, icon_bars, icon_document, icon_outline, outline_data,
    rounded_bar_data, IconStyle,
};
pub use lockup::{lockup_document, lockup_width, FONT_FAMILY, WORDMARK};

pub fn save_icon<T>(path: T, style: &IconStyle) -> Result<(), std::io::Error>
where
    T: std::convert::AsRef<std::path::Path>,
{
    let document = icon_document(style);
    log::debug!("icon {}px -> {}", style.size, path.as_ref().display());

    svg::save(path, &document)
}

pub fn save_lockup<T>(path: T, height: u32) -> Result<(), std::io::Error>
where
    T: std::convert::AsRef<std::path::Path>,
{
    let document = lockup_document(height);
    log::debug!("lockup {}px -> {}", height, path.as_ref().display());

    svg::save(path, &document)
}
