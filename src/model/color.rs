use serde::{Deserialize, Serialize};

/// HSL color. `hue` in degrees `[0, 360)`, `saturation` and `lightness` in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Color {
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Same hue and saturation, lightness shifted by `delta` percentage points.
    pub fn with_lightness_offset(&self, delta: f32) -> Self {
        Self::hsl(self.hue, self.saturation, self.lightness + delta)
    }

    /// Shade difference in lightness percentage points.
    pub fn lightness_distance(&self, other: &Color) -> f32 {
        (self.lightness - other.lightness).abs()
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue / 60.0;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(r), channel(g), channel(b)]
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({:.0}, {:.0}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_to_rgb() {
        assert_eq!(Color::hsl(0.0, 100.0, 50.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Color::hsl(120.0, 100.0, 50.0).to_rgb(), [0, 255, 0]);
        assert_eq!(Color::hsl(240.0, 100.0, 50.0).to_rgb(), [0, 0, 255]);
        assert_eq!(Color::hsl(0.0, 0.0, 100.0).to_rgb(), [255, 255, 255]);
        assert_eq!(Color::hsl(200.0, 60.0, 0.0).to_rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_hsl_normalizes_components() {
        let color = Color::hsl(-30.0, 120.0, -5.0);
        assert_eq!(color.hue, 330.0);
        assert_eq!(color.saturation, 100.0);
        assert_eq!(color.lightness, 0.0);
    }

    #[test]
    fn test_lightness_offset() {
        let base = Color::hsl(210.0, 60.0, 40.0);
        let lighter = base.with_lightness_offset(5.0);
        assert_eq!(lighter.hue, base.hue);
        assert_eq!(lighter.saturation, base.saturation);
        assert_eq!(base.lightness_distance(&lighter), 5.0);
    }

    #[test]
    fn test_css() {
        assert_eq!(Color::hsl(210.0, 60.0, 42.5).to_css(), "hsl(210, 60%, 42.5%)");
    }
}
