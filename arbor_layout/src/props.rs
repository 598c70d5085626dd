// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic property application onto a [`LayoutConfig`].
//!
//! Hosts drive layouts from untyped scene descriptions (scripts, markup,
//! serialized scenes). [`LayoutConfig::apply_prop`] maps one key/value
//! pair onto the typed configuration, rejecting anything malformed while
//! leaving the previous value in place.

use arbor_geometry::{Alignment, Padding};

use crate::config::{LayoutConfig, LayoutKind, Orientation};

/// A dynamically typed property value, borrowed from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropValue<'a> {
    /// A floating-point number.
    Number(f32),
    /// An integral number.
    Integer(i64),
    /// A string.
    Text(&'a str),
    /// A list of numbers.
    Numbers(&'a [f32]),
    /// A boolean.
    Flag(bool),
}

impl PropValue<'_> {
    fn as_number(&self) -> Option<f32> {
        match *self {
            Self::Number(n) => Some(n),
            Self::Integer(i) => Some(i as f32),
            _ => None,
        }
    }

    // Accepts whole-valued floats, since scripted hosts rarely
    // distinguish 2 from 2.0.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The round trip through i64 is exact only for whole values in range."
    )]
    fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            Self::Number(n) if n as i64 as f32 == n => Some(n as i64),
            _ => None,
        }
    }

    fn as_padding(&self) -> Option<Padding> {
        match *self {
            Self::Numbers([top, right, bottom, left]) => {
                Some(Padding::from_array([*top, *right, *bottom, *left]))
            }
            _ => None,
        }
    }
}

impl LayoutConfig {
    /// Applies one named property. Returns whether anything was accepted;
    /// on `false` the configuration is unchanged.
    ///
    /// Kind-specific keys (`orientation`, `columns`, `rows`,
    /// `visiblePage`) are rejected on configurations of another kind.
    pub fn apply_prop(&mut self, key: &str, value: &PropValue<'_>) -> bool {
        match key {
            "width" => match value.as_number() {
                Some(width) => {
                    self.size.x = width;
                    true
                }
                None => false,
            },
            "height" => match value.as_number() {
                Some(height) => {
                    self.size.y = height;
                    true
                }
                None => false,
            },
            "orientation" => {
                let LayoutKind::Linear(orientation) = &mut self.kind else {
                    return false;
                };
                match value {
                    PropValue::Text("vertical") => {
                        *orientation = Orientation::Vertical;
                        true
                    }
                    PropValue::Text("horizontal") => {
                        *orientation = Orientation::Horizontal;
                        true
                    }
                    _ => false,
                }
            }
            "columns" | "rows" => {
                let LayoutKind::Grid { columns, rows } = &mut self.kind else {
                    return false;
                };
                let Some(count) = value.as_integer().and_then(|i| u32::try_from(i).ok()) else {
                    return false;
                };
                if key == "columns" {
                    *columns = count;
                } else {
                    *rows = count;
                }
                true
            }
            // Unrecognized alignment strings fall back to center-center
            // rather than keeping the previous value.
            "alignment" => match value {
                PropValue::Text(text) => {
                    self.item_alignment = Alignment::parse(text).unwrap_or_default();
                    true
                }
                _ => false,
            },
            "defaultItemPadding" | "itemPadding" => match value.as_padding() {
                Some(padding) => {
                    self.item_padding = padding;
                    true
                }
                None => false,
            },
            "visiblePage" => {
                let LayoutKind::Page { visible_page } = &mut self.kind else {
                    return false;
                };
                let Some(page) = value.as_integer().and_then(|i| i32::try_from(i).ok()) else {
                    return false;
                };
                *visible_page = page;
                true
            }
            "skipInvisibleItems" => match value {
                PropValue::Flag(skip) => {
                    self.skip_invisible = *skip;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}
