// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box geometry shared by every node, and the connector curve between two nodes.

use alloc::format;
use alloc::string::String;

use kurbo::{CubicBez, Point};

use crate::config::LayoutConfig;
use crate::metrics::TextMetrics;
use crate::node::NodeBox;
use crate::types::Side;

/// Geometry shared by the root and non-root nodes.
///
/// Implementors provide access to their [`NodeBox`] and a variant-specific [`Placed::measure`];
/// everything else is derived from the box. Coordinates returned by the `*_x`/`*_y` methods are
/// screen coordinates (the configured origin is added). Hit-test methods take origin-relative
/// coordinates, like drop positions.
pub trait Placed {
    /// The node's box.
    fn frame(&self) -> &NodeBox;

    /// The node's box, mutably.
    fn frame_mut(&mut self) -> &mut NodeBox;

    /// Recompute `width` and `height` from the node's text.
    fn measure(&mut self, metrics: &dyn TextMetrics, config: &LayoutConfig);

    /// Width of the text element, without margins.
    fn element_width(&self, config: &LayoutConfig) -> f64 {
        self.frame().width - config.horizontal_margin * 2.0
    }

    /// Height of the text element, without margins.
    fn element_height(&self, config: &LayoutConfig) -> f64 {
        self.frame().height - config.vertical_margin * 2.0
    }

    /// X of the element edge where connectors to children leave.
    fn tail_x(&self, config: &LayoutConfig, side: Side) -> f64 {
        let element_left = config.origin.x + self.frame().left + config.horizontal_margin;
        match side {
            Side::Right => element_left + self.element_width(config),
            Side::Left => element_left,
        }
    }

    /// X of the element edge where the connector from the parent arrives.
    fn head_x(&self, config: &LayoutConfig, side: Side) -> f64 {
        let element_left = config.origin.x + self.frame().left + config.horizontal_margin;
        match side {
            Side::Right => element_left,
            Side::Left => element_left + self.element_width(config),
        }
    }

    /// Vertical center of the box.
    fn center_y(&self, config: &LayoutConfig) -> f64 {
        let frame = self.frame();
        config.origin.y + frame.top + frame.height / 2.0
    }

    /// X where the connectors of all children branch apart.
    fn branch_x(&self, config: &LayoutConfig, side: Side) -> f64 {
        self.tail_x(config, side)
            + side.sign() * config.horizontal_margin * 2.0 * config.path_line_ratio
    }

    /// Whether `position` lies strictly inside the box.
    fn on_area(&self, position: Point) -> bool {
        self.in_x_range(position.x) && self.in_y_range(position.y)
    }

    /// Whether `left` lies strictly between the box's left and right edges.
    fn in_x_range(&self, left: f64) -> bool {
        let frame = self.frame();
        frame.left < left && left < frame.left + frame.width
    }

    /// Whether `top` lies strictly between the box's top and bottom edges.
    fn in_y_range(&self, top: f64) -> bool {
        let frame = self.frame();
        frame.top < top && top < frame.top + frame.height
    }

    /// Whether `top` lies strictly inside the upper half of the box.
    fn on_upper(&self, top: f64) -> bool {
        let frame = self.frame();
        let center = frame.top + frame.height / 2.0;
        frame.top < top && top < center
    }

    /// Whether `left` lies strictly inside the tail region of the box.
    fn on_tail(&self, left: f64, config: &LayoutConfig, side: Side) -> bool {
        let frame = self.frame();
        let tail_width = frame.width * config.tail_area_ratio;
        match side {
            Side::Right => {
                let border = frame.left + frame.width - tail_width;
                border < left && left < frame.left + frame.width
            }
            Side::Left => {
                let border = frame.left + tail_width;
                frame.left < left && left < border
            }
        }
    }
}

/// A cubic connector from a parent's tail to a child's head.
///
/// Both control points share one X, placed between the endpoints by
/// [`LayoutConfig::curve_control_ratio`]; the first shares the start's Y and the second the end's
/// Y. The result is a horizontal S-curve whatever the vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    bez: CubicBez,
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            bez: CubicBez::new(Point::ZERO, Point::ZERO, Point::ZERO, Point::ZERO),
        }
    }
}

impl Curve {
    /// Build a curve from `start` to `end`.
    pub fn new(start: Point, end: Point, control_ratio: f64) -> Self {
        let control_x = start.x + (end.x - start.x) * control_ratio;
        Self {
            bez: CubicBez::new(
                start,
                Point::new(control_x, start.y),
                Point::new(control_x, end.y),
                end,
            ),
        }
    }

    /// Build the connector from `parent` to `child` on `side`.
    pub fn between(
        parent: &(impl Placed + ?Sized),
        child: &(impl Placed + ?Sized),
        config: &LayoutConfig,
        side: Side,
    ) -> Self {
        let start = Point::new(parent.branch_x(config, side), parent.center_y(config));
        let end = Point::new(child.head_x(config, side), child.center_y(config));
        Self::new(start, end, config.curve_control_ratio)
    }

    /// Start of the curve (the parent's branch point).
    pub fn start_point(&self) -> Point {
        self.bez.p0
    }

    /// Control point pulling away from the start.
    pub fn first_control_point(&self) -> Point {
        self.bez.p1
    }

    /// Control point pulling into the end.
    pub fn second_control_point(&self) -> Point {
        self.bez.p2
    }

    /// End of the curve (the child's head).
    pub fn end_point(&self) -> Point {
        self.bez.p3
    }

    /// The curve as a [`CubicBez`].
    pub fn to_cubic(&self) -> CubicBez {
        self.bez
    }

    /// SVG path data: `M x0 y0 C x1 y1 x2 y2 x3 y3`.
    pub fn path_command(&self) -> String {
        let CubicBez { p0, p1, p2, p3 } = self.bez;
        format!(
            "M {} {} C {} {} {} {} {} {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        )
    }
}
