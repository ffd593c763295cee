// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every screen.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_food::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
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
    pub const GRAY_900: Color = Color::from_rgb(0.149, 0.149, 0.188); // #262630
    pub const GRAY_700: Color = Color::from_rgb(0.239, 0.239, 0.302); // #3D3D4D
    pub const GRAY_400: Color = Color::from_rgb(0.424, 0.424, 0.502); // #6C6C80
    pub const GRAY_200: Color = Color::from_rgb(0.784, 0.784, 0.820);
    pub const GRAY_100: Color = Color::from_rgb(0.941, 0.941, 0.961); // #F0F0F5

    // Brand colors
    pub const BRAND_RED: Color = Color::from_rgb(0.780, 0.157, 0.157); // #C72828
    pub const BRAND_RED_DARK: Color = Color::from_rgb(0.620, 0.118, 0.118);
    pub const BRAND_ORANGE: Color = Color::from_rgb(1.0, 0.722, 0.302); // #FFB84D
    pub const BRAND_ORANGE_LIGHT: Color = Color::from_rgb(1.0, 0.800, 0.502);
    pub const PRICE_GREEN: Color = Color::from_rgb(0.224, 0.694, 0.0); // #39B100

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Square thumbnail of a food row.
    pub const FOOD_THUMBNAIL: f32 = 88.0;
    /// Square icon inside a category chip.
    pub const CATEGORY_ICON: f32 = 56.0;
    /// Width of a category chip.
    pub const CATEGORY_CHIP_WIDTH: f32 = 120.0;
    /// Hero image of the details screen.
    pub const DETAILS_IMAGE_WIDTH: f32 = 327.0;
    pub const DETAILS_IMAGE_HEIGHT: f32 = 183.0;

    pub const TAB_BAR_HEIGHT: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Content column width cap so rows stay readable on wide windows.
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen titles
    pub const TITLE_LG: f32 = 30.0;

    /// Food name on the details screen
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers ("Categories", "Extras")
    pub const TITLE_SM: f32 = 18.0;

    /// Prices and totals
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::FOOD_THUMBNAIL > sizing::CATEGORY_ICON);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
