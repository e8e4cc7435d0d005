//! Small fixed-size vector helpers over `[f64; 3]`.

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn neg(a: [f64; 3]) -> [f64; 3] {
    [-a[0], -a[1], -a[2]]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Midpoint of the segment `a`–`b`.
#[inline]
pub fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    scale(add(a, b), 0.5)
}

/// Unit vector along `a`, or `None` when `a` is exactly zero or not finite.
///
/// The test is scale-free: `a` is first divided by its largest component,
/// so very short vectors neither underflow nor count as zero.
pub fn normalize(a: [f64; 3]) -> Option<[f64; 3]> {
    if !is_finite(a) {
        return None;
    }
    let m = a.iter().fold(0.0f64, |m, c| m.max(c.abs()));
    if m == 0.0 {
        return None;
    }
    let b = scale(a, 1.0 / m);
    Some(scale(b, 1.0 / norm(b)))
}

#[inline]
pub fn is_finite(a: [f64; 3]) -> bool {
    a.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn normalize_rejects_zero_and_nan() {
        assert!(normalize([0.0, 0.0, 0.0]).is_none());
        assert!(normalize([f64::NAN, 1.0, 0.0]).is_none());
        let n = normalize([3.0, 0.0, 4.0]).unwrap();
        assert!((norm(n) - 1.0).abs() < 1e-12);
        assert!((n[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn normalize_is_scale_free() {
        for s in [1e-9, 1e-160, 1e150] {
            let n = normalize([3.0 * s, 0.0, -4.0 * s]).unwrap();
            assert!((n[0] - 0.6).abs() < 1e-12);
            assert!((n[2] + 0.8).abs() < 1e-12);
        }
        assert!(normalize([f64::INFINITY, 0.0, 0.0]).is_none());
    }

    #[test]
    fn midpoint_halves() {
        assert_eq!(midpoint([0.0, 2.0, 4.0], [2.0, 0.0, 0.0]), [1.0, 1.0, 2.0]);
    }
}
