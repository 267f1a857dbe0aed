//! Layout and selection configuration.
//!
//! Typically built from defaults, optionally overlaid with a JSON file and
//! command-line flags by the application crate, then handed to the graph's
//! `scale` / `rotate_90_clockwise` and the node locator.

/// Top-level map configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Target drawing-area width in pixels.
    pub width: u32,

    /// Target drawing-area height in pixels.
    pub height: u32,

    /// Blank border kept on every side when fitting the map.
    pub margin: u32,

    /// Clockwise quarter turns applied after scaling.  Values ≥ 4 wrap.
    pub quarter_turns: u8,

    /// Maximum distance (pixels) between a picked point and the node it
    /// selects.  Picks farther than this from every node select nothing.
    pub snap_radius: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width:         1280,
            height:        720,
            margin:        50,
            quarter_turns: 1,
            snap_radius:   50.0,
        }
    }
}

impl MapConfig {
    /// Effective number of quarter turns (`quarter_turns mod 4`).
    #[inline]
    pub fn effective_turns(&self) -> u8 {
        self.quarter_turns % 4
    }

    /// Check that the drawing area leaves room inside the margins and the
    /// snap radius is usable.
    pub fn validate(&self) -> crate::MapResult<()> {
        use crate::MapError;

        if self.width == 0 || self.height == 0 {
            return Err(MapError::Config(format!(
                "drawing area must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let border = u64::from(self.margin) * 2;
        if border >= u64::from(self.width) || border >= u64::from(self.height) {
            return Err(MapError::Config(format!(
                "margin {} leaves no room inside {}x{}",
                self.margin, self.width, self.height
            )));
        }
        if !self.snap_radius.is_finite() || self.snap_radius < 0.0 {
            return Err(MapError::Config(format!(
                "snap_radius must be a finite non-negative number, got {}",
                self.snap_radius
            )));
        }
        Ok(())
    }
}
