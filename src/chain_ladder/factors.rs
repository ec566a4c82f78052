//! Age-to-age and cumulative development factors

use crate::triangle::Triangle;

/// Restricted column sums `(Σcol(j+1), Σcol(j))` for each transition `j`,
/// taken over the first `n - j - 1` accident years
fn restricted_sums(triangle: &Triangle) -> impl Iterator<Item = (f64, f64)> + '_ {
    let n = triangle.size();

    (0..n.saturating_sub(1)).map(move |j| {
        let row_count = n - j - 1;
        (
            triangle.column_sum(j + 1, row_count),
            triangle.column_sum(j, row_count),
        )
    })
}

/// Volume-weighted age-to-age factors, one per lag transition `j -> j+1`
///
/// Transition `j` uses only the first `n - j - 1` accident years. A column
/// whose restricted sum is exactly zero yields a factor of 1.0.
pub fn age_to_age_factors(triangle: &Triangle) -> Vec<f64> {
    restricted_sums(triangle)
        .enumerate()
        .map(|(j, (numerator, denominator))| {
            if denominator != 0.0 {
                numerator / denominator
            } else {
                log::trace!("Development column {} sums to zero, using factor 1.0", j);
                1.0
            }
        })
        .collect()
}

/// Transitions whose factor defaulted to 1.0 because the restricted
/// denominator sum is zero
pub fn degenerate_columns(triangle: &Triangle) -> Vec<usize> {
    restricted_sums(triangle)
        .enumerate()
        .filter(|(_, (_, denominator))| *denominator == 0.0)
        .map(|(j, _)| j)
        .collect()
}

/// Cumulative development factors: `cdf[j]` is the product of `factors[j..]`
///
/// The result has the same length as `factors`. Development from the final
/// lag is implicitly 1.0 and is not stored.
pub fn cumulative_development_factors(factors: &[f64]) -> Vec<f64> {
    let mut cdf = vec![1.0; factors.len()];
    let mut running = 1.0;

    for (j, &f) in factors.iter().enumerate().rev() {
        running *= f;
        cdf[j] = running;
    }

    cdf
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factors_use_restricted_rows() {
        let tri = Triangle::new(vec![
            vec![100.0, 150.0, 180.0],
            vec![200.0, 260.0, 999.0],
            vec![300.0, 999.0, 999.0],
        ])
        .unwrap();

        let f = age_to_age_factors(&tri);
        assert_eq!(f.len(), 2);
        // j = 0 uses rows 0..=1, j = 1 uses row 0 only
        assert_relative_eq!(f[0], 410.0 / 300.0);
        assert_relative_eq!(f[1], 180.0 / 150.0);
    }

    #[test]
    fn test_zero_column_defaults_to_one() {
        let tri = Triangle::new(vec![
            vec![0.0, 0.0, 5.0],
            vec![0.0, 0.0, 0.0],
            vec![4.0, 0.0, 0.0],
        ])
        .unwrap();

        let f = age_to_age_factors(&tri);
        assert_eq!(f, vec![1.0, 1.0]);
        assert_eq!(degenerate_columns(&tri), vec![0, 1]);
    }

    #[test]
    fn test_degenerate_columns_only_flag_zero_denominators() {
        let tri = Triangle::new(vec![
            vec![100.0, 0.0, 0.0],
            vec![120.0, 0.0, 0.0],
            vec![130.0, 0.0, 0.0],
        ])
        .unwrap();

        // j = 0 has a positive denominator and a zero factor; j = 1 defaults
        assert_eq!(age_to_age_factors(&tri), vec![0.0, 1.0]);
        assert_eq!(degenerate_columns(&tri), vec![1]);
    }

    #[test]
    fn test_single_cell_has_no_factors() {
        let tri = Triangle::new(vec![vec![42.0]]).unwrap();
        assert!(age_to_age_factors(&tri).is_empty());
        assert!(degenerate_columns(&tri).is_empty());
        assert!(cumulative_development_factors(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_factors() {
        let cdf = cumulative_development_factors(&[2.0, 1.5, 1.1]);
        assert_relative_eq!(cdf[0], 3.3, epsilon = 1e-12);
        assert_relative_eq!(cdf[1], 1.65, epsilon = 1e-12);
        assert_relative_eq!(cdf[2], 1.1);
    }
}
