use serde::{Deserialize, Serialize};

/// A named numeric data point returned by the `GetMetrics` query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Value formatted the way cards and chart labels print it (`120`, `0.5`).
    pub fn display_value(&self) -> String {
        format_value(self.value)
    }
}

/// Format a metric value without a trailing `.0` for whole numbers.
pub fn format_value(value: f64) -> String {
    // f64's Display already omits the fractional part for integral values.
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integer_and_float_values() {
        let metrics: Vec<Metric> =
            serde_json::from_str(r#"[{"name":"Visits","value":300},{"name":"Rate","value":0.5}]"#)
                .unwrap();
        assert_eq!(metrics[0], Metric::new("Visits", 300.0));
        assert_eq!(metrics[1], Metric::new("Rate", 0.5));
    }

    #[test]
    fn display_value_drops_trailing_zero() {
        assert_eq!(Metric::new("BP Checks", 120.0).display_value(), "120");
        assert_eq!(Metric::new("Rate", 0.25).display_value(), "0.25");
        assert_eq!(format_value(-3.0), "-3");
    }
}
