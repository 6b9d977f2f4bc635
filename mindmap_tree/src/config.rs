// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constants.

use kurbo::Point;

/// Fixed box metrics and ratios used by measurement, placement and hit testing.
///
/// All lengths are in logical pixels. Node boxes are laid out as nested bands:
/// margin, then border, then padding, then the text element.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Screen position of the map origin. Node `top`/`left` are relative to it.
    pub origin: Point,
    /// Margin on the left and right of every node box.
    pub horizontal_margin: f64,
    /// Margin above and below every node box. Adjacent siblings are separated by twice this.
    pub vertical_margin: f64,
    /// Border width around the text element.
    pub border_width: f64,
    /// Padding between border and text.
    pub padding: f64,
    /// Fraction of a node's width, measured from its tail edge, that counts as the tail region
    /// for drag-and-drop re-parenting.
    pub tail_area_ratio: f64,
    /// Fraction of the gap between two linked boxes drawn as a straight stub before the curve
    /// starts. Sibling connectors branch from the end of this stub.
    pub path_line_ratio: f64,
    /// Where the curve's control points sit between its start and end X, as a fraction.
    pub curve_control_ratio: f64,
    /// Height of one line of node text.
    pub line_height: f64,
    /// Height of one line of root text.
    pub root_line_height: f64,
    /// Narrowest text element of a non-root node, so blank nodes remain clickable.
    pub min_text_width: f64,
    /// Narrowest text element of the root node.
    pub root_min_text_width: f64,
    /// Extra width taken by a visible checkbox.
    pub checkbox_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            horizontal_margin: 20.0,
            vertical_margin: 5.0,
            border_width: 1.0,
            padding: 8.0,
            tail_area_ratio: 0.25,
            path_line_ratio: 0.5,
            curve_control_ratio: 0.5,
            line_height: 17.0,
            root_line_height: 24.0,
            min_text_width: 12.0,
            root_min_text_width: 40.0,
            checkbox_width: 22.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal space taken by margin, border and padding on both sides.
    pub fn around_area_width(&self) -> f64 {
        (self.horizontal_margin + self.border_width + self.padding) * 2.0
    }

    /// Vertical space taken by margin, border and padding on both sides.
    pub fn around_area_height(&self) -> f64 {
        (self.vertical_margin + self.border_width + self.padding) * 2.0
    }
}
