// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Confirm order").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_RED_DARK,
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::BRAND_RED,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Category chip; `selected` draws the brand outline.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.weak;
        let background = if selected {
            palette::BRAND_ORANGE_LIGHT
        } else if matches!(status, button::Status::Hovered) {
            theme.extended_palette().background.strong.color
        } else {
            base.color
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if selected { palette::GRAY_700 } else { base.text },
            border: Border {
                color: if selected {
                    palette::BRAND_ORANGE
                } else {
                    Color::TRANSPARENT
                },
                width: 2.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Whole-row button wrapping a food card.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let background = theme.extended_palette().background;
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => background.strong.color,
        _ => background.weak.color,
    };
    button::Style {
        background: Some(Background::Color(color)),
        text_color: background.weak.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon-sized button ("+", "-", favorite toggle, back).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_ORANGE,
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active => theme.palette().text,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Tab of the bottom navigation bar.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = if active {
            palette::BRAND_RED
        } else if matches!(status, button::Status::Hovered) {
            palette::BRAND_ORANGE
        } else {
            theme.extended_palette().background.base.text
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
