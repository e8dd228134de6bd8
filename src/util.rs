// Statistics and formatting helpers shared by the statistics report, the
// preview and the charts.
use num_format::{Locale, ToFormattedString};

pub fn average(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std_dev(v: &[f64]) -> Option<f64> {
    if v.len() < 2 {
        return None;
    }
    let mean = average(v);
    let squares: f64 = v.iter().map(|x| (x - mean).powi(2)).sum();
    Some((squares / (v.len() - 1) as f64).sqrt())
}

/// Index and value of the largest element; the first one wins ties.
pub fn argmax(v: &[f64]) -> Option<(usize, f64)> {
    extreme(v, |candidate, best| candidate > best)
}

/// Index and value of the smallest element; the first one wins ties.
pub fn argmin(v: &[f64]) -> Option<(usize, f64)> {
    extreme(v, |candidate, best| candidate < best)
}

fn extreme(v: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<(usize, f64)> {
    let mut iter = v.iter().copied().enumerate();
    let mut best = iter.next()?;
    for (i, x) in iter {
        if better(x, best.1) {
            best = (i, x);
        }
    }
    Some(best)
}

/// Shortest round-trip form that always shows a fractional part:
/// `30.0`, `32.5`, `28.75`.
pub fn format_verbatim(t: f64) -> String {
    format!("{:?}", t)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
