//! Preprocessing configuration.
//!
//! Policy
//! - Defaults are fixed so two runs over the same input give identical faces.
//!   The CLI may override every field.

/// Default rotation angle (radians) applied about each of the three axes.
pub const DEFAULT_ANGLE: f64 = 0.01;
/// Default relative jitter amplitude (scaled by the bounding-box extent).
pub const DEFAULT_JITTER: f64 = 1e-9;
/// Default seed for the jitter stream.
pub const DEFAULT_SEED: u64 = 0x5eed_c0de;

/// Input preprocessing knobs (degeneracy breaking).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Rotation angle in radians; 0 disables the rotation.
    pub angle: f64,
    /// Relative jitter amplitude; 0 disables the jitter.
    pub jitter: f64,
    /// Seed of the jitter stream.
    pub seed: u64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            jitter: DEFAULT_JITTER,
            seed: DEFAULT_SEED,
        }
    }
}

impl HullCfg {
    /// Configuration that hands points to the hull untouched.
    pub fn identity() -> Self {
        Self {
            angle: 0.0,
            jitter: 0.0,
            seed: DEFAULT_SEED,
        }
    }
}
