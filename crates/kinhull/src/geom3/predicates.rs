use nalgebra::Vector3;

/// Signed 2D cross product of `(b − a)` and `(c − b)` in the (x, y) projection.
///
/// Positive for a left turn a→b→c, negative for a right turn, zero when collinear.
#[inline]
pub fn orientation(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Time at which `b` crosses the line through `a` and `c` while the view rotates.
///
/// The lower silhouette at time `t` is the lower hull of the projection
/// `(x, z − t·y)`; the triple `a, b, c` changes convexity exactly when the
/// (x, z) cross product equals `t` times the (x, y) cross product.
///
/// Returns `None` for collinear (x, y) projections or a non-finite quotient:
/// such a triple never produces an event.
#[inline]
pub fn flip_time(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> Option<f64> {
    let denom = orientation(a, b, c);
    if denom == 0.0 {
        return None;
    }
    let numer = (b.x - a.x) * (c.z - b.z) - (b.z - a.z) * (c.x - b.x);
    let t = numer / denom;
    t.is_finite().then_some(t)
}
