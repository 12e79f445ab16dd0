//! Polar to Cartesian conversion for a single rod

use super::states::CartesianPoint;

/// Offset of a rod's tip from its anchor: `x = l sin(angle)`, `y = l cos(angle)`.
/// Angle zero points straight down (positive `y`).
pub fn to_cartesian(angle: f64, length: f64) -> CartesianPoint {
    CartesianPoint::new(length * angle.sin(), length * angle.cos())
}
