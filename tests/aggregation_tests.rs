use microtiter::methods::AggregationMethod;
use microtiter::scorer::aggregation::{arithmetic_mean, weighted_mean};
use microtiter::scorer::types::{ChannelMatrix, NeighborhoodBlock};
use rstest::rstest;

const EPS: f64 = 1e-9;

fn spike(size: usize, value: f64) -> ChannelMatrix {
    let mut values = vec![0.0; size * size];
    values[(size / 2) * size + size / 2] = value;
    ChannelMatrix::new(size, values)
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(5)]
#[case(7)]
#[case(9)]
fn test_uniform_blocks_aggregate_to_their_value(#[case] size: usize) {
    for value in [0.0, 17.0, 128.0, 255.0] {
        let m = ChannelMatrix::uniform(size, value);
        assert_eq!(arithmetic_mean(&m), value);
        assert_eq!(weighted_mean(&m), value);
    }
}

#[test]
fn test_arithmetic_mean_of_gradient() {
    let m = ChannelMatrix::new(3, (0..9).map(|v| v as f64).collect());
    assert!((arithmetic_mean(&m) - 4.0).abs() < EPS);
}

#[test]
fn test_weighted_mean_is_symmetric_under_transpose() {
    let values: Vec<f64> = (0..25).map(|v| (v * 7 % 11) as f64).collect();
    let mut transposed = vec![0.0; 25];
    for i in 0..5 {
        for j in 0..5 {
            transposed[j * 5 + i] = values[i * 5 + j];
        }
    }
    let a = weighted_mean(&ChannelMatrix::new(5, values));
    let b = weighted_mean(&ChannelMatrix::new(5, transposed));
    assert!((a - b).abs() < EPS);
}

#[test]
fn test_block_aggregation_is_per_channel() {
    let block = NeighborhoodBlock {
        red: ChannelMatrix::uniform(3, 200.0),
        green: spike(3, 90.0),
        blue: ChannelMatrix::uniform(3, 0.0),
    };

    let mean = AggregationMethod::ArithmeticMean.aggregate_block(&block);
    assert_eq!(mean.red, 200.0);
    assert!((mean.green - 10.0).abs() < EPS);
    assert_eq!(mean.blue, 0.0);

    let weighted = AggregationMethod::WeightedMean.aggregate_block(&block);
    assert_eq!(weighted.red, 200.0);
    assert!(weighted.green > mean.green);
    assert_eq!(weighted.blue, 0.0);
}
