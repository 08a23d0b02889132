// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single selectable tag and how its chip is drawn.

use alloc::string::String;

use kurbo::{Rect, RoundedRect, Size};
use peniko::Color;
use peniko::color::palette;

use crate::error::{Result, TagError};

/// Background of a selected chip, and title color of an unselected one.
pub const ACTIVE_DARK_GRAY: Color = Color::from_rgb8(0x31, 0x31, 0x31);

/// Background of an unselected chip.
pub const INACTIVE_GRAY: Color = Color::from_rgb8(0xF3, 0xF3, 0xF5);

/// Secondary text, such as section descriptions.
pub const TEXT_LIGHT_GRAY: Color = Color::from_rgb8(0x96, 0x95, 0x9B);

/// A titled item that can be toggled on and off.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    title: String,
    selected: bool,
}

impl Tag {
    /// Creates a tag.
    pub fn new(title: impl Into<String>, selected: bool) -> Self {
        Self {
            title: title.into(),
            selected,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the tag is currently selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flips the selection flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Colors for this tag's chip in its current state.
    #[must_use]
    pub fn style(&self) -> ChipStyle {
        ChipStyle::for_selected(self.selected)
    }
}

/// Fill and title colors of a chip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChipStyle {
    /// Chip background.
    pub background: Color,
    /// Title text.
    pub title: Color,
}

impl ChipStyle {
    /// Style of a selected chip: dark fill, white title.
    pub const ACTIVE: Self = Self {
        background: ACTIVE_DARK_GRAY,
        title: palette::css::WHITE,
    };

    /// Style of an unselected chip: light fill, dark title.
    pub const INACTIVE: Self = Self {
        background: INACTIVE_GRAY,
        title: ACTIVE_DARK_GRAY,
    };

    /// Picks [`Self::ACTIVE`] or [`Self::INACTIVE`].
    #[must_use]
    pub fn for_selected(selected: bool) -> Self {
        if selected { Self::ACTIVE } else { Self::INACTIVE }
    }
}

/// Padding and rounding applied around a chip's title.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChipMetrics {
    /// Space on each side of the title, horizontally.
    pub horizontal_padding: f64,
    /// Space above and below the title.
    pub vertical_padding: f64,
    /// Corner radius of the chip background.
    pub corner_radius: f64,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            horizontal_padding: 24.0,
            vertical_padding: 12.0,
            corner_radius: 12.0,
        }
    }
}

impl ChipMetrics {
    /// Size of a chip whose title measures `label`.
    #[must_use]
    pub fn chip_size(&self, label: Size) -> Size {
        Size::new(
            label.width + 2.0 * self.horizontal_padding,
            label.height + 2.0 * self.vertical_padding,
        )
    }

    /// Rounded background shape for a chip laid out at `frame`.
    #[must_use]
    pub fn chip_shape(&self, frame: Rect) -> RoundedRect {
        RoundedRect::from_rect(frame, self.corner_radius)
    }
}

/// Parses an opaque `#RRGGBB` color.
///
/// ```
/// use surf_tags::{ACTIVE_DARK_GRAY, hex_color};
///
/// assert_eq!(
///     hex_color("#313131").unwrap().components,
///     ACTIVE_DARK_GRAY.components,
/// );
/// assert!(hex_color("313131").is_err());
/// assert!(hex_color("#31313").is_err());
/// ```
pub fn hex_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').ok_or(TagError::InvalidHexColor)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TagError::InvalidHexColor);
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| TagError::InvalidHexColor)?;
    let [_, r, g, b] = value.to_be_bytes();
    Ok(Color::from_rgb8(r, g, b))
}
