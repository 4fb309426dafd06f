//! The consonance grid consumed by heatmap-style visualizations.

use ndarray::Array2;

use crate::value::{normalize_interval, ExactValue};

/// The default cell metric: the denominator of the normalized interval
/// (1 for intervals that don't reduce to a rational). Smaller means more
/// consonant.
pub fn metric_denom(interval: &ExactValue) -> f64 {
    match normalize_interval(interval, 2).as_ratio() {
        Some(ratio) => *ratio.denom() as f64,
        None {} => 1.0,
    }
}

/// The N×N consonance grid of a scale: `grid[[i, j]]` is the metric
/// applied to `scale[i]/scale[j]`. Without an explicit metric,
/// [metric_denom] is used.
pub fn consonance_matrix(
    scale: &[ExactValue],
    metric: Option<&dyn Fn(&ExactValue) -> f64>,
) -> Array2<f64> {
    Array2::from_shape_fn((scale.len(), scale.len()), |(i, j)| {
        let interval = &scale[i] / &scale[j];
        match metric {
            Some(function) => function(&interval),
            None {} => metric_denom(&interval),
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr2;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_metric_grid() {
        let scale = vec![
            ExactValue::one(),
            ExactValue::rational(3, 2),
            ExactValue::integer(2),
        ];
        let grid = consonance_matrix(&scale, None {});
        assert_eq!(
            grid,
            arr2(&[
                [1.0, 3.0, 1.0],
                [2.0, 1.0, 2.0],
                [1.0, 3.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_custom_metric() {
        let scale = vec![ExactValue::one(), ExactValue::integer(2)];
        let cents = |interval: &ExactValue| 1200.0 * interval.eval().log2();
        let grid = consonance_matrix(&scale, Some(&cents));
        assert_eq!(grid[[1, 0]], 1200.0);
        assert_eq!(grid[[0, 1]], -1200.0);
        assert_eq!(grid[[0, 0]], 0.0);
    }
}
