// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery, lightbox and navigation bar.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay and fade levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use print_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let gutter = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Brand colors (warm ochre, suits print photography)
    pub const PRIMARY_400: Color = Color::from_rgb(0.85, 0.62, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(0.78, 0.53, 0.2);
    pub const PRIMARY_600: Color = Color::from_rgb(0.65, 0.43, 0.15);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop behind the enlarged artwork.
    pub const BACKDROP: f32 = 0.9;

    /// Tile placeholder shown until the thumbnail fades in.
    pub const PLACEHOLDER: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of a grid tile; width follows the column count.
    pub const TILE_HEIGHT: f32 = 240.0;

    /// Side of the square lightbox navigation and close buttons.
    pub const NAV_BUTTON: f32 = 48.0;

    /// Space the lightbox keeps free around the enlarged artwork.
    pub const LIGHTBOX_MARGIN: f32 = 72.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;

    pub const SPINNER: f32 = 48.0;
    pub const SPINNER_STROKE: f32 = 3.0;

    /// Width reserved by the grid scrollbar; compensated while scroll is locked.
    pub const SCROLLBAR_WIDTH: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings (home, category titles)
    pub const TITLE_LG: f32 = 30.0;

    /// Application name in the navigation bar
    pub const TITLE_MD: f32 = 20.0;

    /// Lightbox caption title
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body text
    pub const BODY: f32 = 14.0;

    /// Tile captions, position indicator
    pub const CAPTION: f32 = 12.0;

    /// Glyphs on the lightbox navigation buttons
    pub const NAV_GLYPH: f32 = 28.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);
    assert!(opacity::PLACEHOLDER > 0.0 && opacity::PLACEHOLDER < 1.0);

    assert!(sizing::LIGHTBOX_MARGIN > sizing::NAV_BUTTON);
    assert!(sizing::SPINNER > sizing::SPINNER_STROKE * 2.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
