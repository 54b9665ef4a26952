// Math utilities and helper functions

use glam::IVec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Chebyshev (king move) distance between two grid cells
pub fn grid_distance(a: IVec2, b: IVec2) -> i32 {
    let delta = (a - b).abs();
    delta.x.max(delta.y)
}
