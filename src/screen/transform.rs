// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Maps a rectangle of layout coordinates onto a pixel canvas.
///
/// X is the layout abscissa, Y is the timepoint axis; both grow in the same
/// direction on screen (downwards in time, no flip). Scales are derived from
/// the bound rectangle and the canvas size and kept in sync on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTransform {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    screen_width: u32,
    screen_height: u32,
    scale_x: f64,
    scale_y: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0, 2, 2)
    }
}

impl ScreenTransform {
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        let mut transform = Self {
            min_x,
            max_x,
            min_y,
            max_y,
            screen_width,
            screen_height,
            scale_x: 1.0,
            scale_y: 1.0,
        };
        transform.update_scale();
        transform
    }

    fn update_scale(&mut self) {
        self.scale_x = (self.screen_width as f64 - 1.0) / (self.max_x - self.min_x);
        self.scale_y = (self.screen_height as f64 - 1.0) / (self.max_y - self.min_y);
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    /// Pixels per layout unit along X.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Pixels per layout unit along Y.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// How much farther apart two points one layout unit apart in Y appear
    /// on screen, compared to one layout unit in X.
    pub fn aspect_ratio_x_to_y(&self) -> f64 {
        self.scale_y / self.scale_x
    }

    pub fn set_bounds(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
        self.update_scale();
    }

    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.update_scale();
    }

    pub fn screen_to_layout_x(&self, x: f64) -> f64 {
        self.min_x + x / self.scale_x
    }

    pub fn screen_to_layout_y(&self, y: f64) -> f64 {
        self.min_y + y / self.scale_y
    }

    pub fn layout_to_screen_x(&self, x: f64) -> f64 {
        (x - self.min_x) * self.scale_x
    }

    pub fn layout_to_screen_y(&self, y: f64) -> f64 {
        (y - self.min_y) * self.scale_y
    }

    /// Zoom along X by `factor`, keeping the layout point under screen
    /// coordinate `screen_center_x` fixed.
    pub fn zoom_x(&mut self, factor: f64, screen_center_x: f64) {
        let fixed = self.screen_to_layout_x(screen_center_x);
        let new_size = (self.max_x - self.min_x) * factor;
        self.scale_x = (self.screen_width as f64 - 1.0) / new_size;
        self.min_x = fixed - screen_center_x / self.scale_x;
        self.max_x = self.min_x + new_size;
    }

    /// Zoom along Y by `factor`, keeping the layout point under screen
    /// coordinate `screen_center_y` fixed.
    pub fn zoom_y(&mut self, factor: f64, screen_center_y: f64) {
        let fixed = self.screen_to_layout_y(screen_center_y);
        let new_size = (self.max_y - self.min_y) * factor;
        self.scale_y = (self.screen_height as f64 - 1.0) / new_size;
        self.min_y = fixed - screen_center_y / self.scale_y;
        self.max_y = self.min_y + new_size;
    }

    /// Zoom both axes by `factor` about a fixed screen point.
    pub fn zoom(&mut self, factor: f64, screen_center_x: f64, screen_center_y: f64) {
        self.zoom_x(factor, screen_center_x);
        self.zoom_y(factor, screen_center_y);
    }

    /// Pan by a pixel delta along X.
    pub fn shift_x(&mut self, screen_delta: f64) {
        self.shift_layout_x(screen_delta / self.scale_x);
    }

    /// Pan by a pixel delta along Y.
    pub fn shift_y(&mut self, screen_delta: f64) {
        self.shift_layout_y(screen_delta / self.scale_y);
    }

    pub fn shift_layout_x(&mut self, delta: f64) {
        self.min_x += delta;
        self.max_x += delta;
    }

    pub fn shift_layout_y(&mut self, delta: f64) {
        self.min_y += delta;
        self.max_y += delta;
    }

    /// Blend between transforms `a` and `b`; `ratio` 0 yields `a`, 1 yields
    /// `b`. Bounds and canvas size are blended, scales re-derived.
    pub fn interpolate(a: &ScreenTransform, b: &ScreenTransform, ratio: f64) -> ScreenTransform {
        let inv = 1.0 - ratio;
        ScreenTransform::new(
            inv * a.min_x + ratio * b.min_x,
            inv * a.max_x + ratio * b.max_x,
            inv * a.min_y + ratio * b.min_y,
            inv * a.max_y + ratio * b.max_y,
            (inv * a.screen_width as f64 + ratio * b.screen_width as f64) as u32,
            (inv * a.screen_height as f64 + ratio * b.screen_height as f64) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenTransform;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn layout_screen_round_trip() {
        let t = ScreenTransform::new(-3.0, 7.0, 2.0, 12.0, 801, 601);
        for x in [-3.0, 0.0, 3.25, 7.0] {
            assert!(close(t.screen_to_layout_x(t.layout_to_screen_x(x)), x));
        }
        for y in [2.0, 5.5, 12.0] {
            assert!(close(t.screen_to_layout_y(t.layout_to_screen_y(y)), y));
        }
    }

    #[test]
    fn y_axis_is_not_flipped() {
        let t = ScreenTransform::new(0.0, 10.0, 0.0, 10.0, 101, 101);
        assert!(close(t.layout_to_screen_y(0.0), 0.0));
        assert!(close(t.layout_to_screen_y(10.0), 100.0));
        assert!(t.layout_to_screen_y(2.0) < t.layout_to_screen_y(8.0));
    }

    #[test]
    fn zoom_keeps_the_anchor_point_fixed() {
        let mut t = ScreenTransform::new(0.0, 10.0, 0.0, 20.0, 401, 401);
        let anchor_x = 120.0;
        let anchor_y = 333.0;
        let layout_x = t.screen_to_layout_x(anchor_x);
        let layout_y = t.screen_to_layout_y(anchor_y);

        t.zoom(0.5, anchor_x, anchor_y);

        assert!(close(t.screen_to_layout_x(anchor_x), layout_x));
        assert!(close(t.screen_to_layout_y(anchor_y), layout_y));
        assert!(close(t.max_x() - t.min_x(), 5.0));
        assert!(close(t.max_y() - t.min_y(), 10.0));
    }

    #[test]
    fn shift_moves_bounds_by_pixel_delta() {
        let mut t = ScreenTransform::new(0.0, 10.0, 0.0, 10.0, 101, 101);
        t.shift_x(10.0);
        assert!(close(t.min_x(), 1.0));
        assert!(close(t.max_x(), 11.0));
        t.shift_layout_y(-2.0);
        assert!(close(t.min_y(), -2.0));
        assert!(close(t.max_y(), 8.0));
    }

    #[test]
    fn interpolate_blends_bounds() {
        let a = ScreenTransform::new(0.0, 10.0, 0.0, 10.0, 101, 101);
        let b = ScreenTransform::new(10.0, 30.0, 2.0, 6.0, 201, 101);
        let half = ScreenTransform::interpolate(&a, &b, 0.5);
        assert!(close(half.min_x(), 5.0));
        assert!(close(half.max_x(), 20.0));
        assert!(close(half.min_y(), 1.0));
        assert!(close(half.max_y(), 8.0));
        assert_eq!(half.screen_width(), 151);
        assert_eq!(ScreenTransform::interpolate(&a, &b, 0.0), a);
        assert_eq!(ScreenTransform::interpolate(&a, &b, 1.0), b);
    }
}
