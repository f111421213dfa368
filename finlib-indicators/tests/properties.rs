use finlib_indicators::kernel::weights;
use finlib_indicators::{
    macd, moving_average, relative_strength, to_series, williams_r, AverageKind, IndicatorError,
    Series,
};
use rust_decimal_macros::dec;

fn oscillating(len: usize) -> Series {
    (0..len)
        .map(|i| {
            let t = i as f64;
            50.0 + (t * 0.45).sin() * 4.0 + (t * 0.13).cos() * 2.5
        })
        .collect()
}

#[test]
fn moving_average_preserves_length_and_edge_fill() {
    let prices = oscillating(80);
    for n in [1, 2, 5, 14, 40, 79] {
        for kind in [AverageKind::Simple, AverageKind::Exponential] {
            let out = moving_average(&prices, n, kind).unwrap();
            assert_eq!(out.len(), prices.len());
            for i in 0..n {
                assert_eq!(out[i], out[n], "n={n} kind={kind} index={i}");
            }
        }
    }
}

#[test]
fn settled_simple_average_matches_window_mean() {
    let prices = oscillating(30);
    let n = 7;
    let out = moving_average(&prices, n, AverageKind::Simple).unwrap();
    for i in n..prices.len() {
        let mean = prices.slice(ndarray::s![i + 1 - n..=i]).sum() / n as f64;
        assert!((out[i] - mean).abs() < 1e-9, "index {i}");
    }
}

#[test]
fn weight_vectors_are_normalised() {
    for n in [1, 3, 9, 12, 26, 200] {
        assert!((weights(n, AverageKind::Simple).sum() - 1.0).abs() < 1e-12);
        assert!((weights(n, AverageKind::Exponential).sum() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn macd_histogram_is_exact_difference() {
    let prices = oscillating(120);
    let out = macd(&prices, 26, 12, 9).unwrap();
    let expected = &out.macd - &out.signal;
    assert_eq!(out.histogram, expected);
    assert_eq!(out.macd.len(), prices.len());
}

#[test]
fn rsi_seed_positions_share_one_value() {
    let prices = oscillating(60);
    let n = 14;
    let rsi = relative_strength(&prices, n).unwrap();
    assert_eq!(rsi.len(), prices.len());
    for i in 1..n {
        assert_eq!(rsi[i], rsi[0]);
    }
    assert!(rsi[0] > 0.0 && rsi[0] < 100.0);
}

#[test]
fn rsi_leaves_positive_changes_at_zero() {
    // The seed window holds losses; every change read by the update loop is a gain.
    let mut prices: Vec<f64> = vec![20.0, 19.0, 20.5, 19.5];
    let n = 4;
    let mut last = *prices.last().unwrap();
    for _ in 0..20 {
        last += 0.75;
        prices.push(last);
    }
    let rsi = relative_strength(&prices, n).unwrap();
    for i in n..prices.len() {
        assert_eq!(rsi[i], 0.0, "index {i}");
    }
}

#[test]
fn rsi_only_updates_on_non_positive_changes() {
    let prices: [f64; 8] = [10.0, 11.0, 10.0, 11.0, 10.0, 9.0, 10.0, 9.5];
    let rsi = relative_strength(&prices, 2).unwrap();
    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    for i in 2..prices.len() {
        if deltas[i - 1] > 0.0 {
            assert_eq!(rsi[i], 0.0, "index {i}");
        } else {
            assert!(rsi[i] > 0.0 && rsi[i] < 100.0, "index {i}");
        }
    }
}

#[test]
fn williams_r_never_returns_values() {
    let prices = oscillating(30);
    assert_eq!(
        williams_r(&prices, 14),
        Err(IndicatorError::NotImplemented("Williams %R"))
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let prices = oscillating(90);
    let first = (
        moving_average(&prices, 10, AverageKind::Exponential).unwrap(),
        macd(&prices, 26, 12, 9).unwrap(),
        relative_strength(&prices, 14).unwrap(),
    );
    let second = (
        moving_average(&prices, 10, AverageKind::Exponential).unwrap(),
        macd(&prices, 26, 12, 9).unwrap(),
        relative_strength(&prices, 14).unwrap(),
    );
    let bits = |series: &Series| series.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first.0), bits(&second.0));
    assert_eq!(bits(&first.1.macd), bits(&second.1.macd));
    assert_eq!(bits(&first.1.signal), bits(&second.1.signal));
    assert_eq!(bits(&first.2), bits(&second.2));
}

#[test]
fn decimal_prices_feed_float_indicators() {
    let prices = to_series(&[dec!(10.5), dec!(11.0), dec!(10.75), dec!(11.25), dec!(11.5)]);
    let out = moving_average(&prices, 2, AverageKind::Simple).unwrap();
    assert_eq!(out[2], 10.875);
    assert_eq!(out[0], out[2]);
}
