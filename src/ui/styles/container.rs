// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Brand header band at the top of each screen.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_RED)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Rounded surface for grouped content (extras list, order total).
///
/// Derived from the active `Theme` so it reads in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;
    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Grey square drawn while an image is loading or failed to load.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom navigation bar.
pub fn tab_bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
