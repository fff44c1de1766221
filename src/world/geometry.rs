// geometry.rs - Rotation of grid points about a center
//
// Coordinates are fine-grid cells. Rows grow downward, so a positive
// angle turns clockwise on screen.

/// Rotate `(x, y)` about `(cx, cy)` by `degrees` and snap to the nearest cell.
/// Returns `None` when the result leaves `[0, bound)` on either axis.
#[inline]
pub fn rotate(x: f64, y: f64, cx: f64, cy: f64, degrees: f64, bound: usize) -> Option<(usize, usize)> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (dx, dy) = (x - cx, y - cy);

    let nx = (cos * dx - sin * dy + cx).round();
    let ny = (sin * dx + cos * dy + cy).round();

    let b = bound as f64;
    if nx >= 0.0 && nx < b && ny >= 0.0 && ny < b {
        Some((nx as usize, ny as usize))
    } else {
        None
    }
}
