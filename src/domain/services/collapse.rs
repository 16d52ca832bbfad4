//! Scroll progress to header layout.
//!
//! Each output is a clamped linear map over `[0, progress_end]`. No smoothing
//! is applied here; the header follows the scroll position directly.

use crate::config::CollapseConfig;

/// Clamped linear interpolation from an input range to an output range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        let span = in_end - in_start;
        if span == 0.0 {
            return if value < in_start { out_start } else { out_end };
        }

        let t = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

/// Resolved header styles for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarTransform {
    pub height: f64,
    pub top_offset_y: f64,
    pub bottom_offset_y: f64,
    pub bottom_offset_x: f64,
}

impl NavbarTransform {
    pub fn at(progress: f64, config: &CollapseConfig) -> Self {
        let range = (0.0, config.progress_end);
        Self {
            height: LinearMap::new(range, (config.expanded_height, config.collapsed_height))
                .apply(progress),
            top_offset_y: LinearMap::new(range, (0.0, config.top_offset_y)).apply(progress),
            bottom_offset_y: LinearMap::new(range, (0.0, config.bottom_offset_y)).apply(progress),
            bottom_offset_x: LinearMap::new(range, (0.0, config.bottom_offset_x)).apply(progress),
        }
    }

    /// Inline style for the `<nav>` element
    pub fn nav_style(&self) -> String {
        format!("height: {:.2}px;", self.height)
    }

    /// Inline style for the logo/search row
    pub fn top_style(&self) -> String {
        format!("transform: translateY({:.2}px);", self.top_offset_y)
    }

    /// Inline style for the item row
    pub fn bottom_style(&self) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px);",
            self.bottom_offset_x, self.bottom_offset_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_height_endpoints() {
        let config = CollapseConfig::default();
        assert_eq!(NavbarTransform::at(0.0, &config).height, 88.0);
        assert_eq!(NavbarTransform::at(0.1, &config).height, 45.0);
    }

    #[test]
    fn test_height_midpoint() {
        let config = CollapseConfig::default();
        assert!(approx(NavbarTransform::at(0.05, &config).height, 66.5));
    }

    #[test]
    fn test_clamped_past_collapse_range() {
        let config = CollapseConfig::default();
        for progress in [0.1, 0.2, 0.5, 1.0] {
            let t = NavbarTransform::at(progress, &config);
            assert_eq!(t.height, 45.0);
            assert_eq!(t.top_offset_y, -45.0);
            assert_eq!(t.bottom_offset_y, -45.0);
            assert_eq!(t.bottom_offset_x, 65.0);
        }
    }

    #[test]
    fn test_offsets_at_rest() {
        let t = NavbarTransform::at(0.0, &CollapseConfig::default());
        assert_eq!(t.top_offset_y, 0.0);
        assert_eq!(t.bottom_offset_y, 0.0);
        assert_eq!(t.bottom_offset_x, 0.0);
    }

    #[test]
    fn test_offsets_interpolate_together() {
        let t = NavbarTransform::at(0.02, &CollapseConfig::default());
        assert!(approx(t.top_offset_y, -9.0));
        assert!(approx(t.bottom_offset_y, -9.0));
        assert!(approx(t.bottom_offset_x, 13.0));
    }

    #[test]
    fn test_linear_map_clamps_below_range() {
        let map = LinearMap::new((0.0, 0.1), (88.0, 45.0));
        assert_eq!(map.apply(-0.5), 88.0);
    }

    #[test]
    fn test_linear_map_degenerate_range_steps() {
        let map = LinearMap::new((0.3, 0.3), (1.0, 2.0));
        assert_eq!(map.apply(0.1), 1.0);
        assert_eq!(map.apply(0.3), 2.0);
    }

    #[test]
    fn test_styles_format() {
        let t = NavbarTransform::at(0.1, &CollapseConfig::default());
        assert_eq!(t.nav_style(), "height: 45.00px;");
        assert_eq!(t.top_style(), "transform: translateY(-45.00px);");
        assert_eq!(t.bottom_style(), "transform: translate(65.00px, -45.00px);");
    }
}
