//! Mapping between the pixel grid and the complex plane.
//!
//! A viewport is described by its `center`, an `anchor` (the plane location of
//! the leftmost, vertically centred pixel) and the output resolution. Pixel
//! spacing and zoom level are derived from those three on every call so they
//! can never drift out of sync.

use crate::core::data::complex::Complex;
use crate::core::data::direction::{PanDirection, ZoomDirection};
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::transition::Transition;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    DegenerateAnchor { center: Complex, anchor: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAnchor { center, anchor } => {
                write!(
                    f,
                    "anchor ({}, {}) must lie strictly left of center ({}, {})",
                    anchor.real, anchor.imag, center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Zoom level for a center/anchor pair, if the pair is usable at all.
fn zoom_level_of(center: Complex, anchor: Complex) -> Option<f64> {
    let span = center.real - anchor.real;
    let zoom = 1.0 / span;

    if span > 0.0 && span.is_finite() && zoom.is_finite() {
        Some(zoom)
    } else {
        None
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    anchor: Complex,
    resolution: Resolution,
}

impl Viewport {
    pub fn new(
        center: Complex,
        anchor: Complex,
        resolution: Resolution,
    ) -> Result<Self, ViewportError> {
        if !center.is_finite()
            || !anchor.is_finite()
            || zoom_level_of(center, anchor).is_none()
        {
            return Err(ViewportError::DegenerateAnchor { center, anchor });
        }

        Ok(Self {
            center,
            anchor,
            resolution,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn anchor(&self) -> Complex {
        self.anchor
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Same center and anchor at a different output size.
    #[must_use]
    pub fn with_resolution(&self, resolution: Resolution) -> Self {
        Self {
            resolution,
            ..*self
        }
    }

    /// Plane distance between horizontally (and vertically) adjacent pixels.
    #[must_use]
    pub fn pixel_spacing(&self) -> f64 {
        (self.anchor.real - self.center.real).abs() / f64::from(self.resolution.width()) * 2.0
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        1.0 / (self.center.real - self.anchor.real)
    }

    fn top_edge_imag(&self, spacing: f64) -> f64 {
        self.anchor.imag + (f64::from(self.resolution.height()) / 2.0) * spacing
    }

    #[must_use]
    pub fn pixel_to_point(&self, pixel: Point) -> Complex {
        let spacing = self.pixel_spacing();

        Complex {
            real: self.anchor.real + f64::from(pixel.x) * spacing,
            imag: self.top_edge_imag(spacing) - f64::from(pixel.y) * spacing,
        }
    }

    /// Inverse of [`Viewport::pixel_to_point`], in fractional pixel units.
    #[must_use]
    pub fn point_to_pixel(&self, point: Complex) -> (f64, f64) {
        let spacing = self.pixel_spacing();

        (
            (point.real - self.anchor.real) / spacing,
            (self.top_edge_imag(spacing) - point.imag) / spacing,
        )
    }

    /// Moves the center to the plane point under `pixel`, keeping the zoom.
    /// The anchor follows at the same real-axis distance, level with the new
    /// center.
    pub fn recenter(&mut self, pixel: Point) -> Transition {
        let span = self.center.real - self.anchor.real;
        let center = self.pixel_to_point(pixel);

        self.replace(center, Complex::new(center.real - span, center.imag))
    }

    /// Shifts center and anchor together by `step_pixels` pixel spacings.
    pub fn pan(&mut self, direction: PanDirection, step_pixels: f64) -> Transition {
        let (unit_real, unit_imag) = direction.unit();
        let distance = step_pixels * self.pixel_spacing();
        let offset = Complex::new(unit_real * distance, unit_imag * distance);

        self.replace(self.center + offset, self.anchor + offset)
    }

    /// Moves the anchor toward (`In`) or away from (`Out`) the center.
    ///
    /// Zooming in is rejected when the resulting zoom level would exceed
    /// `max_zoom`, or when the anchor would reach or cross the center.
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        step_pixels: f64,
        max_zoom: f64,
    ) -> Transition {
        let distance = step_pixels * self.pixel_spacing();
        let anchor = match direction {
            ZoomDirection::In => Complex::new(self.anchor.real + distance, self.anchor.imag),
            ZoomDirection::Out => Complex::new(self.anchor.real - distance, self.anchor.imag),
        };

        match (direction, zoom_level_of(self.center, anchor)) {
            (ZoomDirection::In, Some(zoom)) if zoom > max_zoom => {
                log::trace!("zoom in rejected: {} exceeds max {}", zoom, max_zoom);
                Transition::Rejected
            }
            (_, Some(_)) => {
                self.anchor = anchor;
                Transition::Applied
            }
            (_, None) => {
                log::trace!("zoom rejected: anchor would collapse onto center");
                Transition::Rejected
            }
        }
    }

    fn replace(&mut self, center: Complex, anchor: Complex) -> Transition {
        if !center.is_finite() || !anchor.is_finite() || zoom_level_of(center, anchor).is_none() {
            log::trace!("navigation rejected: degenerate center/anchor pair");
            return Transition::Rejected;
        }

        self.center = center;
        self.anchor = anchor;
        Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn viewport(width: u32, height: u32, center: Complex, anchor: Complex) -> Viewport {
        Viewport::new(center, anchor, Resolution::new(width, height).unwrap()).unwrap()
    }

    fn default_4x4() -> Viewport {
        viewport(4, 4, Complex::ZERO, Complex::new(-2.0, 0.0))
    }

    fn assert_point_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < TOLERANCE && (a.imag - b.imag).abs() < TOLERANCE,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_pixel_spacing_is_derived_from_anchor() {
        let view = default_4x4();

        assert_eq!(view.pixel_spacing(), 1.0);
        assert_eq!(view.zoom_level(), 0.5);
    }

    #[test]
    fn test_pixel_to_point_corners_and_center() {
        let view = default_4x4();

        assert_eq!(view.pixel_to_point(Point { x: 0, y: 0 }), Complex::new(-2.0, 2.0));
        assert_eq!(view.pixel_to_point(Point { x: 2, y: 2 }), Complex::new(0.0, 0.0));
        assert_eq!(view.pixel_to_point(Point { x: 3, y: 3 }), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_imaginary_axis_is_flipped() {
        let view = default_4x4();
        let upper = view.pixel_to_point(Point { x: 1, y: 0 });
        let lower = view.pixel_to_point(Point { x: 1, y: 3 });

        assert!(upper.imag > lower.imag);
    }

    #[test]
    fn test_round_trip_for_every_pixel() {
        let views = [
            default_4x4(),
            viewport(37, 21, Complex::new(-0.75, 0.1), Complex::new(-2.25, 0.1)),
            viewport(150, 150, Complex::new(0.3, -0.02), Complex::new(0.2999, -0.02)),
        ];

        for view in views {
            for y in 0..view.resolution().height() as i32 {
                for x in 0..view.resolution().width() as i32 {
                    let point = view.pixel_to_point(Point { x, y });
                    let (px, py) = view.point_to_pixel(point);

                    assert!((px - f64::from(x)).abs() < 1e-6, "x {} -> {}", x, px);
                    assert!((py - f64::from(y)).abs() < 1e-6, "y {} -> {}", y, py);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_anchor_fails() {
        let resolution = Resolution::new(4, 4).unwrap();
        let same = Viewport::new(Complex::ZERO, Complex::ZERO, resolution);
        let right_of_center = Viewport::new(Complex::ZERO, Complex::new(1.0, 0.0), resolution);

        assert_eq!(
            same,
            Err(ViewportError::DegenerateAnchor {
                center: Complex::ZERO,
                anchor: Complex::ZERO
            })
        );
        assert!(right_of_center.is_err());
    }

    #[test]
    fn test_recenter_moves_clicked_point_to_center_and_keeps_zoom() {
        let mut view = viewport(100, 80, Complex::ZERO, Complex::new(-2.0, 0.0));
        let zoom_before = view.zoom_level();
        let clicked = Point { x: 70, y: 20 };
        let target = view.pixel_to_point(clicked);

        assert_eq!(view.recenter(clicked), Transition::Applied);
        assert_point_close(view.center(), target);
        assert!((view.zoom_level() - zoom_before).abs() < TOLERANCE);
        assert_point_close(view.pixel_to_point(Point { x: 50, y: 40 }), target);
    }

    #[test]
    fn test_recenter_puts_anchor_level_with_new_center() {
        let mut view = viewport(100, 100, Complex::new(0.0, 0.5), Complex::new(-2.0, 0.0));
        let target = view.pixel_to_point(Point { x: 10, y: 10 });

        assert_eq!(view.recenter(Point { x: 10, y: 10 }), Transition::Applied);

        assert_point_close(view.center(), target);
        assert_point_close(view.anchor(), Complex::new(target.real - 2.0, target.imag));
        assert_eq!(view.anchor().imag, view.center().imag);
    }

    #[test]
    fn test_pan_shifts_center_and_anchor_by_five_pixels() {
        let mut view = viewport(100, 100, Complex::ZERO, Complex::new(-2.0, 0.0));
        let spacing = view.pixel_spacing();

        assert_eq!(view.pan(PanDirection::Right, 5.0), Transition::Applied);
        assert_point_close(view.center(), Complex::new(5.0 * spacing, 0.0));
        assert_point_close(view.anchor(), Complex::new(-2.0 + 5.0 * spacing, 0.0));

        assert_eq!(view.pan(PanDirection::Up, 5.0), Transition::Applied);
        assert_point_close(view.center(), Complex::new(5.0 * spacing, 5.0 * spacing));
        assert!((view.pixel_spacing() - spacing).abs() < TOLERANCE);
    }

    #[test]
    fn test_pan_round_trip_returns_to_start() {
        let mut view = viewport(64, 48, Complex::new(-0.5, 0.25), Complex::new(-1.5, 0.25));
        let start = view;

        view.pan(PanDirection::Left, 5.0);
        view.pan(PanDirection::Down, 5.0);
        view.pan(PanDirection::Right, 5.0);
        view.pan(PanDirection::Up, 5.0);

        assert_point_close(view.center(), start.center());
        assert_point_close(view.anchor(), start.anchor());
    }

    #[test]
    fn test_zoom_in_and_out_move_anchor_only() {
        let mut view = viewport(800, 600, Complex::ZERO, Complex::new(-2.0, 0.0));
        let center = view.center();
        let zoom_before = view.zoom_level();

        assert_eq!(view.zoom(ZoomDirection::In, 100.0, 1e13), Transition::Applied);
        assert_eq!(view.center(), center);
        assert!(view.zoom_level() > zoom_before);
        // 100 pixels of spacing 0.005 each
        assert_point_close(view.anchor(), Complex::new(-1.5, 0.0));

        assert_eq!(view.zoom(ZoomDirection::Out, 100.0, 1e13), Transition::Applied);
        assert!(view.zoom_level() < 1.0 / 1.5);
    }

    #[test]
    fn test_zoom_in_rejected_beyond_max_zoom() {
        let mut view = viewport(800, 600, Complex::ZERO, Complex::new(-2.0, 0.0));
        let before = view;

        // next step would give zoom 1/1.5 > 0.6
        assert_eq!(view.zoom(ZoomDirection::In, 100.0, 0.6), Transition::Rejected);
        assert_eq!(view, before);
    }

    #[test]
    fn test_repeated_zoom_in_never_exceeds_max_zoom() {
        let max_zoom = 1e6;
        let mut view = viewport(800, 600, Complex::new(-0.7436, 0.1318), Complex::new(-2.7436, 0.1318));
        let mut rejected_at = None;

        for call in 0..500 {
            let transition = view.zoom(ZoomDirection::In, 100.0, max_zoom);
            assert!(view.zoom_level() <= max_zoom);

            if transition == Transition::Rejected {
                rejected_at.get_or_insert(call);
                // once at the boundary every further call is a no-op
                let frozen = view;
                assert_eq!(view.zoom(ZoomDirection::In, 100.0, max_zoom), Transition::Rejected);
                assert_eq!(view, frozen);
            }
        }

        assert!(rejected_at.is_some());
    }

    #[test]
    fn test_zoom_step_that_would_cross_center_is_rejected() {
        // 4 pixels wide: 100 pixel spacings is far past the center
        let mut view = default_4x4();

        assert_eq!(view.zoom(ZoomDirection::In, 100.0, f64::MAX), Transition::Rejected);
        assert_eq!(view, default_4x4());
    }

    #[test]
    fn test_with_resolution_keeps_center_and_anchor() {
        let view = default_4x4();
        let resized = view.with_resolution(Resolution::new(8, 2).unwrap());

        assert_eq!(resized.center(), view.center());
        assert_eq!(resized.anchor(), view.anchor());
        assert_eq!(resized.pixel_spacing(), 0.5);
    }
}
