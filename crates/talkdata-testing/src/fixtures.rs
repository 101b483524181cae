use serde_json::{Value, json};
use talkdata_types::{QueryResponse, Row};

pub const SALES_BY_REGION_SQL: &str =
    "SELECT region, SUM(sales) AS sales FROM orders GROUP BY region";

/// Build a row from a JSON object literal.
pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("row fixture must be a JSON object, got {other}"),
    }
}

/// `n` rows shaped `{"id": i, "name": "item-i"}`.
pub fn numbered_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| row(json!({"id": i, "name": format!("item-{i}")})))
        .collect()
}

pub fn sales_by_region_body() -> Value {
    json!({
        "question": "Show me sales by region",
        "sql_query": SALES_BY_REGION_SQL,
        "results": [{"region": "East", "sales": 100}],
        "row_count": 1
    })
}

pub fn revenue_chart_body() -> Value {
    json!({
        "sql_query": "SELECT category, SUM(revenue) AS revenue FROM sales GROUP BY category",
        "insights": "B brings in twice the revenue of A.",
        "chart_data": {"type": "bar", "labels": ["A", "B"], "label": "Revenue", "values": [10, 20]},
        "results": [
            {"category": "A", "revenue": 10},
            {"category": "B", "revenue": 20}
        ],
        "row_count": 2
    })
}

/// A capped payload: `shown` rows in `results`, `row_count` reported.
pub fn large_body(shown: usize, row_count: u64) -> Value {
    let results: Vec<Value> = numbered_rows(shown).into_iter().map(Value::Object).collect();
    json!({
        "sql_query": "SELECT id, name FROM products",
        "chart_data": {"type": "table", "data": []},
        "results": results,
        "row_count": row_count
    })
}

/// An answer taller than any terminal: 10 SQL lines, 8 insight lines and a
/// 15-bar chart. Lines carry `col_NN`, `Insight NN` and `Cat NN` markers.
pub fn long_answer_body() -> Value {
    let mut sql = vec!["SELECT category, SUM(revenue) AS revenue FROM sales".to_string()];
    sql.extend((1..=8).map(|i| format!("  AND col_{i:02} IS NOT NULL")));
    sql.insert(1, "WHERE col_00 IS NOT NULL".to_string());
    let insights: Vec<String> = (1..=8)
        .map(|i| format!("Insight {i:02}: category {i} grew steadily."))
        .collect();
    let labels: Vec<String> = (1..=15).map(|i| format!("Cat {i:02}")).collect();
    let values: Vec<u32> = (1..=15).map(|i| i * 10).collect();

    json!({
        "sql_query": sql.join("\n"),
        "insights": insights.join("\n"),
        "chart_data": {"type": "bar", "labels": labels, "label": "Revenue", "values": values},
        "results": [{"categories": 15}],
        "row_count": 1
    })
}

pub fn sales_by_region_response() -> QueryResponse {
    decode(sales_by_region_body())
}

pub fn revenue_chart_response() -> QueryResponse {
    decode(revenue_chart_body())
}

pub fn large_response(shown: usize, row_count: u64) -> QueryResponse {
    decode(large_body(shown, row_count))
}

pub fn long_answer_response() -> QueryResponse {
    decode(long_answer_body())
}

fn decode(body: Value) -> QueryResponse {
    serde_json::from_value(body).expect("fixture body decodes")
}
