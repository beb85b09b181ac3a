//! KPI tiles and their display formatting.
//!
//! Numbers use en-US conventions: comma thousands separators and a dot
//! decimal point. Currency is always USD.

use serde::{Deserialize, Serialize};

use mfgerp_core::ValueObject;

/// A tile value: numeric, or text shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KpiValue {
    Number(f64),
    Text(String),
}

impl From<f64> for KpiValue {
    fn from(v: f64) -> Self {
        KpiValue::Number(v)
    }
}

impl From<&str> for KpiValue {
    fn from(v: &str) -> Self {
        KpiValue::Text(v.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    #[default]
    Number,
    Percentage,
    Currency,
}

/// Display-only derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: KpiValue,
    /// Period-over-period change, in percent.
    pub change: Option<f64>,
    pub trend: Option<Trend>,
    pub format: Option<KpiFormat>,
}

impl ValueObject for Kpi {}

impl Kpi {
    pub fn new(title: impl Into<String>, value: impl Into<KpiValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            trend: None,
            format: None,
        }
    }

    pub fn with_change(mut self, change: f64, trend: Trend) -> Self {
        self.change = Some(change);
        self.trend = Some(trend);
        self
    }

    pub fn with_format(mut self, format: KpiFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            KpiValue::Text(text) => text.clone(),
            KpiValue::Number(v) => match self.format.unwrap_or_default() {
                KpiFormat::Percentage => format!("{v}%"),
                KpiFormat::Currency => format_currency(*v),
                KpiFormat::Number => format_number(*v),
            },
        }
    }

    /// "+12%" style label; `None` when the change is absent or zero.
    pub fn change_label(&self) -> Option<String> {
        match self.change {
            Some(c) if c != 0.0 && c.is_finite() => {
                let sign = if c > 0.0 { "+" } else { "" };
                Some(format!("{sign}{c}%"))
            }
            _ => None,
        }
    }

    pub fn trend_or_neutral(&self) -> Trend {
        self.trend.unwrap_or_default()
    }
}

/// Grouped digits with up to three fraction digits: `1,234.568`.
pub fn format_number(value: f64) -> String {
    format_grouped(value, 0, 3)
}

/// en-US dollars: `$125,450.00`, `-$3.50`.
pub fn format_currency(value: f64) -> String {
    let body = format_grouped(value.abs(), 2, 2);
    if value < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_fraction {
        frac.push('0');
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac.bytes().all(|b| b == b'0'));
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn text_values_are_verbatim() {
        let k = Kpi::new("Total Production Value", "$125,450").with_format(KpiFormat::Currency);
        assert_eq!(k.display_value(), "$125,450");
    }

    #[test]
    fn numeric_formats() {
        assert_eq!(Kpi::new("On-Time", 85.0).with_format(KpiFormat::Percentage).display_value(), "85%");
        assert_eq!(Kpi::new("On-Time", 85.5).with_format(KpiFormat::Percentage).display_value(), "85.5%");
        assert_eq!(Kpi::new("Value", 125450.0).with_format(KpiFormat::Currency).display_value(), "$125,450.00");
        assert_eq!(Kpi::new("Orders", 1234.0).display_value(), "1,234");
        assert_eq!(Kpi::new("Orders", 4.0).with_format(KpiFormat::Number).display_value(), "4");
    }

    #[test]
    fn grouping_edges() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-3.5), "-$3.50");
        assert_eq!(format_currency(0.001), "$0.00");
    }

    #[test]
    fn change_labels() {
        assert_eq!(Kpi::new("x", 1.0).with_change(12.0, Trend::Up).change_label().as_deref(), Some("+12%"));
        assert_eq!(Kpi::new("x", 1.0).with_change(-3.5, Trend::Down).change_label().as_deref(), Some("-3.5%"));
        assert_eq!(Kpi::new("x", 1.0).with_change(0.0, Trend::Neutral).change_label(), None);
        assert_eq!(Kpi::new("x", 1.0).change_label(), None);
        assert_eq!(Kpi::new("x", 1.0).trend_or_neutral(), Trend::Neutral);
    }

    #[test]
    fn value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&KpiValue::Number(4.0)).unwrap(), "4.0");
        assert_eq!(serde_json::to_string(&KpiValue::from("$1")).unwrap(), "\"$1\"");
    }

    proptest! {
        #[test]
        fn grouped_integers_round_trip_digits(n in 0u64..10_000_000_000) {
            let s = format_number(n as f64);
            prop_assert_eq!(s.replace(',', ""), n.to_string());
            prop_assert!(s.split(',').skip(1).all(|g| g.len() == 3));
        }
    }
}
