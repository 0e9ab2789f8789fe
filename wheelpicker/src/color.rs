/// An RGBA color with `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    /// Opaque cyan, used for the selected item unless configured otherwise.
    pub const DEFAULT_ACTIVE: Color = Color::rgb(0.0, 1.0, 1.0);
    /// `0xFF888888`, used for inactive items unless configured otherwise.
    pub const DEFAULT_INACTIVE: Color = Color::rgb(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
            alpha as f32 / 255.0,
        )
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            channel_to_u8(self.alpha),
        ]
    }

    /// Packs the color as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Linearly interpolates every channel from `start` to `stop`.
    ///
    /// `fraction` is clamped to `[0, 1]`. The endpoints are returned exactly at `0` and `1`, and
    /// interpolating between identical colors returns that color for any fraction.
    pub fn lerp(start: Color, stop: Color, fraction: f32) -> Color {
        let t = clamp_unit(fraction);
        Color {
            red: lerp_channel(start.red, stop.red, t),
            green: lerp_channel(start.green, stop.green, t),
            blue: lerp_channel(start.blue, stop.blue, t),
            alpha: lerp_channel(start.alpha, stop.alpha, t),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT_INACTIVE
    }
}

/// Progress of a scale value through the `[inactive_scale, 1]` interval.
///
/// When the interval is empty (`inactive_scale == 1`) every item counts as fully active.
pub fn color_fraction(scale: f32, inactive_scale: f32) -> f32 {
    let interval = 1.0 - inactive_scale;
    if interval <= 0.0 {
        return 1.0;
    }
    clamp_unit((scale - inactive_scale) / interval)
}

/// Interpolates between the inactive and active colors for an item at `scale`.
pub fn color_for_scale(inactive: Color, active: Color, scale: f32, inactive_scale: f32) -> Color {
    Color::lerp(inactive, active, color_fraction(scale, inactive_scale))
}

fn lerp_channel(start: f32, stop: f32, t: f32) -> f32 {
    if start == stop || t <= 0.0 {
        start
    } else if t >= 1.0 {
        stop
    } else {
        start + t * (stop - start)
    }
}

fn clamp_unit(v: f32) -> f32 {
    // NaN falls through to 0 so a degenerate input never poisons a channel.
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn channel_to_u8(v: f32) -> u8 {
    let scaled = clamp_unit(v) * 255.0 + 0.5;
    scaled as u8
}
