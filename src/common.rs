/// Largest per-node absolute change between two score vectors of equal length.
pub fn max_delta(previous: &[f64], current: &[f64]) -> f64 {
    assert_eq!(previous.len(), current.len());
    previous
        .iter()
        .zip(current.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

pub fn l1_delta(previous: &[f64], current: &[f64]) -> f64 {
    assert_eq!(previous.len(), current.len());
    previous
        .iter()
        .zip(current.iter())
        .map(|(a, b)| (a - b).abs())
        .sum()
}
