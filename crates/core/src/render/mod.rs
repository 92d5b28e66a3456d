//! Utilities for converting grid state into screen space, including the
//! circular-arc interpolation used to animate a rotation in flight. Everything
//! in here is query-only: the [HexMap](crate::HexMap)'s own progress/commit
//! logic is the source of truth for when a rotation ends.

#[cfg(feature = "svg")]
pub mod svg;
mod unit;

pub use self::unit::*;

use crate::{
    grid::HexPoint,
    puzzle::{Cell, Cursor, HexMap, RotationState, RotationTriple},
};
use anyhow::Context;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use validator::Validate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Configuration that determines how a grid is presented on screen.
///
/// **This is different from the puzzle config.** The puzzle config controls
/// how the grid is generated; the render config just controls how it's
/// visually presented afterwards.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Hex circumradius: the distance from the center of a cell to one of its
    /// 6 vertices, in pixels. Also the length of one side of the cell.
    #[validate(range(min = 1.0, max = 512.0))]
    pub hex_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { hex_size: 16.0 }
    }
}

/// A grid renderer converts grid state into screen-space positions for a
/// presentation shell to paint, using a "pointy-top" hex layout.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new one.
#[derive(Copy, Clone, Debug)]
pub struct GridRenderer {
    render_config: RenderConfig,
}

impl GridRenderer {
    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config
            .validate()
            .context("invalid render config")?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Convert a point from grid space to 2D screen space using the standard
    /// pointy-top transform: `x = size·(√3·q + √3/2·r)`, `y = size·(3/2·r)`.
    /// https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
    ///
    /// Note: this layout and the cursor's row-parity direction mapping are a
    /// matched pair. Switching to a flat-top layout would have to change both
    /// in lockstep.
    pub fn hex_to_screen_space(&self, point: HexPoint) -> Point2 {
        let size = self.render_config.hex_size;
        let q = f64::from(point.q());
        let r = f64::from(point.r());
        Point2 {
            x: size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            y: size * (3.0 / 2.0 * r),
        }
    }

    /// The pivot a rotation orbits around: the centroid of the three
    /// projected cell centers.
    pub fn rotation_pivot(&self, hexes: &RotationTriple) -> Point2 {
        let sum: Point2 = hexes
            .iter()
            .map(|&hex| self.hex_to_screen_space(hex))
            .sum();
        sum / 3.0
    }

    /// Interpolate a point along a circular arc about `pivot`, `progress` of
    /// the way from `start` to `end`. The angles of `start` and `end` around
    /// the pivot are measured with atan2, their difference is normalized to
    /// the shortest signed path in (−π, π], and the angle is interpolated
    /// linearly. The output stays at `start`'s radius, so three cells
    /// animating at once visually orbit their shared centroid instead of
    /// cutting through it.
    pub fn rotate_point(
        start: Point2,
        end: Point2,
        pivot: Point2,
        progress: f64,
    ) -> Point2 {
        let start_rel = Vector2::new(start.x - pivot.x, start.y - pivot.y);
        let end_rel = Vector2::new(end.x - pivot.x, end.y - pivot.y);

        let start_angle = start_rel.y.atan2(start_rel.x);
        let end_angle = end_rel.y.atan2(end_rel.x);

        // Normalize to the shortest signed path
        let mut angle_diff = end_angle - start_angle;
        if angle_diff > PI {
            angle_diff -= 2.0 * PI;
        } else if angle_diff < -PI {
            angle_diff += 2.0 * PI;
        }

        let angle = start_angle + angle_diff * progress;
        let radius = start_rel.norm();
        (nalgebra::Point2::new(pivot.x, pivot.y)
            + Vector2::new(angle.cos(), angle.sin()) * radius)
            .into()
    }

    /// The current screen position of one cell: a point mid-arc if the cell
    /// is part of the active rotation, its resting projection otherwise.
    pub fn cell_position(
        &self,
        map: &HexMap,
        pos: HexPoint,
        cell: &Cell,
    ) -> Point2 {
        let resting = self.hex_to_screen_space(pos);
        match (cell.rotation(), map.rotation()) {
            (RotationState::Rotating { target, progress }, Some(hexes)) => {
                let end = self.hex_to_screen_space(target);
                Self::rotate_point(
                    resting,
                    end,
                    self.rotation_pivot(hexes),
                    progress,
                )
            }
            _ => resting,
        }
    }

    /// One full drawing pass: every cell with its coordinate, display color,
    /// and interpolated-or-resting screen position.
    pub fn frame<'a>(
        &'a self,
        map: &'a HexMap,
    ) -> impl Iterator<Item = (HexPoint, Color3, Point2)> + 'a {
        map.cells().iter().map(move |(&pos, cell)| {
            (pos, cell.color(), self.cell_position(map, pos, cell))
        })
    }

    /// The projected centers of the cursor's three cells, for outline drawing
    pub fn cursor_outline(&self, cursor: &Cursor) -> [Point2; 3] {
        cursor.hexes().map(|hex| self.hex_to_screen_space(hex))
    }

    /// The six vertices of a pointy-top hexagon centered at `center`,
    /// clockwise starting from the top vertex
    pub fn hex_corners(&self, center: Point2) -> [Point2; 6] {
        let size = self.render_config.hex_size;
        let mut corners = [Point2::default(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            // Pointy-top vertices sit at -90°, -30°, 30°, ...
            let angle = (60.0 * i as f64 - 90.0) * PI / 180.0;
            *corner = Point2 {
                x: center.x + size * angle.cos(),
                y: center.y + size * angle.sin(),
            };
        }
        corners
    }
}
