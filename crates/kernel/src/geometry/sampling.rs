//! Uniform sampling and easing helpers shared by the profile strategies and
//! the extruder.

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// `count == 1` yields `[start]`; `count == 0` yields an empty vector. The
/// last value is assigned `end` directly so it is exact.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Cubic Hermite ease: 0 below `edge0`, 1 above `edge1`, `3s² - 2s³` between.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let s = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    s * s * (3.0 - 2.0 * s)
}

/// Linear interpolation of `x` between `(x0, y0)` and `(x1, y1)`, clamped to
/// the segment ends.
pub fn interp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Centered finite difference of `values`, one-sided at the two ends.
///
/// Fewer than two values have no defined slope and yield zeros.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| match i {
            0 => values[1] - values[0],
            i if i == n - 1 => values[n - 1] - values[n - 2],
            i => (values[i + 1] - values[i - 1]) / 2.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_exact() {
        let v = linspace(0.0, 1.0, 15);
        assert_eq!(v.len(), 15);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[14], 1.0);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(-1.0, 1.0, 0).is_empty());
        assert_eq!(linspace(-1.0, 1.0, 1), vec![-1.0]);
        assert_eq!(linspace(-15.0, 15.0, 2), vec![-15.0, 15.0]);
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.7, 1.0, 0.5), 0.0);
        assert_eq!(smoothstep(0.7, 1.0, 1.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_interp_clamps() {
        assert_eq!(interp(-1.0, 0.0, 0.3, 1.75, 2.0), 1.75);
        assert_eq!(interp(0.5, 0.0, 0.3, 1.75, 2.0), 2.0);
        assert!((interp(0.15, 0.0, 0.3, 1.75, 2.0) - 1.875).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_linear_is_constant() {
        let g = gradient(&[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(g, vec![2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_gradient_short_inputs() {
        assert!(gradient(&[]).is_empty());
        assert_eq!(gradient(&[3.0]), vec![0.0]);
        assert_eq!(gradient(&[1.0, 4.0]), vec![3.0, 3.0]);
    }
}
