// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement seam.
//!
//! The engine never shapes or measures text itself. Hosts implement [`TextMetrics`] on top of
//! whatever font stack they render with and the engine turns the reported extents into box sizes.

/// The font a piece of text is rendered with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontProfile {
    /// The root node's font.
    Root,
    /// The font of every other node.
    Node,
}

/// Measured extent of a block of text.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Width of the longest line.
    pub longest_line_width: f64,
    /// Number of lines. Blank text counts as one line.
    pub line_count: usize,
}

/// Measures text for a font profile.
pub trait TextMetrics {
    /// Measure `text` as rendered with `font`.
    fn measure(&self, text: &str, font: FontProfile) -> TextExtent;
}

impl<F> TextMetrics for F
where
    F: Fn(&str, FontProfile) -> TextExtent,
{
    fn measure(&self, text: &str, font: FontProfile) -> TextExtent {
        self(text, font)
    }
}
