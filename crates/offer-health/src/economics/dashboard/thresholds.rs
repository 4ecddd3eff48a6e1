use serde::Serialize;

/// Ratio to target below which a higher-is-better metric drops from yellow to red.
const AT_LEAST_YELLOW_FLOOR: f64 = 0.7;
/// Ratio to target above which a lower-is-better metric drops from yellow to red.
const AT_MOST_YELLOW_CEILING: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Green,
    Yellow,
    Red,
}

impl MetricStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }
}

/// Threshold shape used to grade a metric value.
///
/// Comparisons are written so that a NaN value fails every check and lands on red.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdRule {
    /// Higher is better; graded on `value / target`.
    AtLeast { target: f64 },
    /// Lower is better; graded on `value / target`.
    AtMost { target: f64 },
    /// Green inside `healthy`, yellow inside `tolerated` but outside `healthy`, red elsewhere.
    /// Both ranges are inclusive.
    Band {
        healthy: (f64, f64),
        tolerated: (f64, f64),
    },
}

impl ThresholdRule {
    pub fn classify(&self, value: f64) -> MetricStatus {
        match *self {
            ThresholdRule::AtLeast { target } => {
                let ratio = value / target;
                if ratio >= 1.0 {
                    MetricStatus::Green
                } else if ratio >= AT_LEAST_YELLOW_FLOOR {
                    MetricStatus::Yellow
                } else {
                    MetricStatus::Red
                }
            }
            ThresholdRule::AtMost { target } => {
                let ratio = value / target;
                if ratio <= 1.0 {
                    MetricStatus::Green
                } else if ratio <= AT_MOST_YELLOW_CEILING {
                    MetricStatus::Yellow
                } else {
                    MetricStatus::Red
                }
            }
            ThresholdRule::Band { healthy, tolerated } => {
                if value >= healthy.0 && value <= healthy.1 {
                    MetricStatus::Green
                } else if value >= tolerated.0 && value <= tolerated.1 {
                    MetricStatus::Yellow
                } else {
                    MetricStatus::Red
                }
            }
        }
    }
}

/// Folds per-metric statuses into one.
///
/// Any red wins. More than two yellows also counts as red rather than yellow.
pub fn overall_status<I>(statuses: I) -> MetricStatus
where
    I: IntoIterator<Item = MetricStatus>,
{
    let counts = StatusCounts::tally(statuses);
    if counts.red > 0 || counts.yellow > 2 {
        MetricStatus::Red
    } else if counts.yellow > 0 {
        MetricStatus::Yellow
    } else {
        MetricStatus::Green
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl StatusCounts {
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = MetricStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                match status {
                    MetricStatus::Green => counts.green += 1,
                    MetricStatus::Yellow => counts.yellow += 1,
                    MetricStatus::Red => counts.red += 1,
                }
                counts
            })
    }
}
