//! Chart data for the dashboard: price histogram with a density overlay,
//! price spread per room count, and meters-vs-price points.
//!
//! Everything here is plain numbers so the plot layer only has to draw.

use std::collections::BTreeMap;

use super::model::Listing;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width bins spanning `[min, max]`; the maximum lands in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            start: min - 0.5,
            end: max + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Gaussian kernel density over `[min, max]`, scaled to histogram counts
/// for bins of `bin_width`. Bandwidth follows Scott's rule.
pub fn kde_curve(values: &[f64], points: usize, bin_width: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || points < 2 {
        return Vec::new();
    }
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let sigma = variance.sqrt();
    if sigma == 0.0 {
        return Vec::new();
    }
    let bandwidth = sigma * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    let step = (max - min) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = min + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Box plot: price by room count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub rooms: u32,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Prices beyond 1.5·IQR from the box.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    fn from_sorted(rooms: u32, sorted: &[f64]) -> Option<Self> {
        if sorted.is_empty() {
            return None;
        }
        let q1 = quantile(sorted, 0.25);
        let median = quantile(sorted, 0.5);
        let q3 = quantile(sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = || {
            sorted
                .iter()
                .copied()
                .filter(move |&v| v >= low_fence && v <= high_fence)
        };
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(BoxStats {
            rooms,
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// One box per room count, ascending.
pub fn box_stats_by_rooms<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> Vec<BoxStats> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for listing in rows {
        groups.entry(listing.rooms).or_default().push(listing.price);
    }
    groups
        .into_iter()
        .filter_map(|(rooms, mut prices)| {
            prices.sort_by(f64::total_cmp);
            BoxStats::from_sorted(rooms, &prices)
        })
        .collect()
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// Scatter: meters vs price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub meters: f64,
    pub price: f64,
    pub rooms: u32,
}

pub fn scatter_points<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> Vec<ScatterPoint> {
    rows.into_iter()
        .map(|l| ScatterPoint {
            meters: f64::from(l.meters),
            price: l.price,
            rooms: l.rooms,
        })
        .collect()
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
