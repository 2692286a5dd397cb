use brand_lib::color::{to_string, NAVY, TEAL, TEAL_DARK};
use itertools::Itertools;

use crate::kit::{FAVICON_SVG, ICON_SVG, LOGO_SVG};

/// Plain-text usage notes shipped inside the kit.
pub fn readme_text(png_sizes: &[u32]) -> String {
    let sizes = png_sizes.iter().join("/");
    format!(
        "BorrowPower Logo Kit
======================

This kit includes:
- SVG: {icon} (icon), {logo} (icon + wordmark), {favicon}
- PNG icons: icon-{sizes}.png

Brand colors:
- Teal: {teal}
- Teal (dark for bars): {teal_dark}
- Navy (wordmark): {navy}

HTML includes:
<link rel=\"icon\" type=\"image/svg+xml\" href=\"/assets/{favicon}\">
<link rel=\"alternate icon\" type=\"image/png\" href=\"/assets/icon-32.png\">
<link rel=\"apple-touch-icon\" href=\"/assets/icon-180.png\">
",
        icon = ICON_SVG,
        logo = LOGO_SVG,
        favicon = FAVICON_SVG,
        sizes = sizes,
        teal = to_string(&TEAL),
        teal_dark = to_string(&TEAL_DARK),
        navy = to_string(&NAVY),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::PNG_SIZES;

    #[test]
    fn test_lists_files_and_colors() {
        let text = readme_text(&PNG_SIZES);
        assert!(text.starts_with("BorrowPower Logo Kit\n"));
        assert!(text.contains(
            "- SVG: borrowpower-icon.svg (icon), borrowpower-logo-horizontal.svg (icon + wordmark), favicon.svg\n"
        ));
        assert!(text.contains("- PNG icons: icon-32/48/64/128/180/192/256/512.png\n"));
        assert!(text.contains("- Teal: #157D83\n"));
        assert!(text.contains("- Teal (dark for bars): #0F6E73\n"));
        assert!(text.contains("- Navy (wordmark): #1F3A5F\n"));
    }

    #[test]
    fn test_head_snippets() {
        let text = readme_text(&PNG_SIZES);
        let links = text.lines().filter(|l| l.starts_with("<link")).collect_vec();
        assert_eq!(links.len(), 3);
        assert_eq!(
            links[0],
            "<link rel=\"icon\" type=\"image/svg+xml\" href=\"/assets/favicon.svg\">"
        );
        assert!(links[2].contains("apple-touch-icon"));
        assert!(text.ends_with("icon-180.png\">\n"));
    }
}
