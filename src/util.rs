pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Round to two decimal places (percentages, reported seconds).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
