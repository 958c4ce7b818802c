//! Trailing simple-moving-average computation over close-price slices.

/// Trailing simple moving average over `closes`.
///
/// The output has the same length as the input. Index `i` is `None` until a
/// full window of observations exists (`i < window - 1`), after that it holds
/// the mean of the `window` closes ending at `i`.
///
/// A `window` of zero yields all-`None`; inputs shorter than the window never
/// produce a value.
pub fn simple_moving_average(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if window == 0 || i + 1 < window {
                None
            } else {
                let sum: f64 = closes[i + 1 - window..=i].iter().sum();
                Some(sum / window as f64)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= TOL * scale, "{a} != {b}");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(simple_moving_average(&[], 30).is_empty());
    }

    #[test]
    fn input_shorter_than_window_is_all_none() {
        let out = simple_moving_average(&[1.0; 29], 30);
        assert_eq!(out.len(), 29);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn zero_window_is_all_none() {
        let out = simple_moving_average(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn first_full_window_of_one_to_thirty_averages_to_fifteen_point_five() {
        let closes: Vec<f64> = (1..=30).map(f64::from).collect();
        let out = simple_moving_average(&closes, 30);
        assert!(out[..29].iter().all(Option::is_none));
        let Some(ma) = out[29] else {
            panic!("expected a value at the first full window");
        };
        assert_close(ma, 15.5);
    }

    #[test]
    fn window_of_one_reproduces_the_input() {
        let closes = [4.0, 9.0, 2.5];
        let out = simple_moving_average(&closes, 1);
        for (c, ma) in closes.iter().zip(&out) {
            assert_close(*c, ma.unwrap());
        }
    }

    proptest! {
        #[test]
        fn output_length_matches_input(
            closes in proptest::collection::vec(-1e6..1e6f64, 0..200),
            window in 0usize..50,
        ) {
            prop_assert_eq!(simple_moving_average(&closes, window).len(), closes.len());
        }

        #[test]
        fn values_absent_exactly_before_first_full_window(
            closes in proptest::collection::vec(-1e6..1e6f64, 0..200),
            window in 1usize..50,
        ) {
            let out = simple_moving_average(&closes, window);
            for (i, v) in out.iter().enumerate() {
                prop_assert_eq!(v.is_none(), i + 1 < window);
            }
        }

        #[test]
        fn deterministic_over_repeated_runs(
            closes in proptest::collection::vec(-1e6..1e6f64, 0..200),
            window in 0usize..50,
        ) {
            let a = simple_moving_average(&closes, window);
            let b = simple_moving_average(&closes, window);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn each_value_is_the_window_mean(
            closes in proptest::collection::vec(-1e3..1e3f64, 1..100),
            window in 1usize..20,
        ) {
            let out = simple_moving_average(&closes, window);
            for (i, v) in out.iter().enumerate() {
                if let Some(ma) = v {
                    let expected: f64 =
                        closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
                    prop_assert!((ma - expected).abs() <= TOL * expected.abs().max(1.0));
                }
            }
        }
    }
}
