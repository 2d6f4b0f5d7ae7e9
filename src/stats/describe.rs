//! Descriptive statistics over a numeric column.
use serde::Serialize;

/// count, mean, std, min, quartiles and max of a column.
///
/// Missing values are ignored. `std` is the sample standard deviation (n - 1)
/// and quartiles are linearly interpolated between the closest ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub q50: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Linear interpolation quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl Describe {
    pub fn new<I>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut v: Vec<f64> = values.into_iter().flatten().collect();
        v.sort_by(f64::total_cmp);

        let count = v.len();
        let mean = (count > 0).then(|| v.iter().sum::<f64>() / count as f64);
        let std = match (mean, count) {
            (Some(mean), n) if n > 1 => {
                let devs = v.iter().fold(0.0, |acc, x| acc + (x - mean).powi(2));
                Some((devs / (n - 1) as f64).sqrt())
            }
            _ => None,
        };
        let q = |q: f64| (count > 0).then(|| quantile(&v, q));

        Self {
            column: column.into(),
            count,
            mean,
            std,
            min: v.first().copied(),
            q25: q(0.25),
            q50: q(0.5),
            q75: q(0.75),
            max: v.last().copied(),
        }
    }

    /// Statistic names and values, in display order.
    pub fn values(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}
