use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart payload attached to a query response, dispatched on its `type` tag.
///
/// Only bar charts are renderable. Every other tag, and any bar payload that
/// is missing its series, decodes to [`ChartData::Unsupported`] instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChartData", into = "RawChartData")]
pub enum ChartData {
    Bar(BarChartData),
    Unsupported { kind: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    /// Category axis.
    pub labels: Vec<String>,
    /// Series name.
    pub label: String,
    /// Series values; expected to match `labels` in length but not checked.
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn kind(&self) -> &str {
        match self {
            ChartData::Bar(_) => "bar",
            ChartData::Unsupported { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawChartData {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<Value>>,
}

impl From<RawChartData> for ChartData {
    fn from(raw: RawChartData) -> Self {
        if raw.kind != "bar" {
            return ChartData::Unsupported { kind: raw.kind };
        }

        let (Some(labels), Some(values)) = (raw.labels, raw.values) else {
            return ChartData::Unsupported { kind: raw.kind };
        };

        let Some(values) = values.iter().map(numeric_value).collect::<Option<Vec<f64>>>() else {
            return ChartData::Unsupported { kind: raw.kind };
        };

        ChartData::Bar(BarChartData {
            labels: labels.iter().map(label_text).collect(),
            label: raw.label.unwrap_or_default(),
            values,
        })
    }
}

impl From<ChartData> for RawChartData {
    fn from(chart: ChartData) -> Self {
        match chart {
            ChartData::Bar(bar) => RawChartData {
                kind: "bar".to_string(),
                labels: Some(bar.labels.into_iter().map(Value::String).collect()),
                label: Some(bar.label),
                values: Some(bar.values.into_iter().map(Value::from).collect()),
            },
            ChartData::Unsupported { kind } => RawChartData {
                kind,
                ..Default::default()
            },
        }
    }
}

// Decimal columns often arrive as strings ("12.50").
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> ChartData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_bar_chart_decodes() {
        let chart = decode(json!({
            "type": "bar",
            "labels": ["A", "B"],
            "label": "Revenue",
            "values": [10, 20]
        }));

        assert_eq!(
            chart,
            ChartData::Bar(BarChartData {
                labels: vec!["A".to_string(), "B".to_string()],
                label: "Revenue".to_string(),
                values: vec![10.0, 20.0],
            })
        );
    }

    #[test]
    fn test_table_tag_is_unsupported() {
        let chart = decode(json!({"type": "table", "data": [{"a": 1}]}));

        assert_eq!(
            chart,
            ChartData::Unsupported {
                kind: "table".to_string()
            }
        );
        assert_eq!(chart.kind(), "table");
    }

    #[test]
    fn test_bar_without_values_is_unsupported() {
        let chart = decode(json!({"type": "bar", "labels": ["A"], "label": "x"}));

        assert!(matches!(chart, ChartData::Unsupported { .. }));
    }

    #[test]
    fn test_bar_with_non_numeric_value_is_unsupported() {
        let chart = decode(json!({"type": "bar", "labels": ["A"], "label": "x", "values": [true]}));

        assert!(matches!(chart, ChartData::Unsupported { .. }));
    }

    #[test]
    fn test_decimal_strings_and_numeric_labels() {
        let chart = decode(json!({
            "type": "bar",
            "labels": [2023, "2024"],
            "label": "total",
            "values": ["12.50", 3.25]
        }));

        let ChartData::Bar(bar) = chart else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.labels, vec!["2023", "2024"]);
        assert_eq!(bar.values, vec![12.5, 3.25]);
    }

    #[test]
    fn test_mismatched_lengths_pass_through() {
        let chart = decode(json!({"type": "bar", "labels": ["A", "B", "C"], "label": "x", "values": [1]}));

        let ChartData::Bar(bar) = chart else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.labels.len(), 3);
        assert_eq!(bar.values.len(), 1);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let chart = ChartData::Bar(BarChartData {
            labels: vec!["A".to_string()],
            label: "Revenue".to_string(),
            values: vec![1.5],
        });

        assert_eq!(
            serde_json::to_value(&chart).unwrap(),
            json!({"type": "bar", "labels": ["A"], "label": "Revenue", "values": [1.5]})
        );
    }
}
