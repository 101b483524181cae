use anyhow::Result;
use std::io::Write;
use talkdata_engine::TableView;

/// Header plus the displayed rows. Cells are already stringified by the adapter.
pub fn write_table<W: Write>(writer: W, table: &TableView) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&table.columns)?;
    for row in &table.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use talkdata_engine::to_table_view;
    use talkdata_testing::fixtures::revenue_chart_response;

    #[test]
    fn test_write_table() {
        let response = revenue_chart_response();
        let table = to_table_view(&response.results, response.row_count()).unwrap();

        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "category,revenue\nA,10\nB,20\n"
        );
    }
}
