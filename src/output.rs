use crate::types::{PreviewRow, WeatherTable};
use crate::util::format_verbatim;
use std::io::{self, Write};
use tabled::{settings::Style, Table, Tabled};

pub fn preview_rows(table: &WeatherTable, max_rows: usize) -> Vec<PreviewRow> {
    table
        .records()
        .iter()
        .take(max_rows)
        .enumerate()
        .map(|(index, r)| PreviewRow {
            index,
            date: r.date.clone(),
            temperature: format_verbatim(r.temperature),
        })
        .collect()
}

pub fn preview_table_rows<W, T>(out: &mut W, rows: &[T], max_rows: usize) -> io::Result<()>
where
    W: Write,
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        return writeln!(out, "(no rows)\n");
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    writeln!(out, "{}", table_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeatherRecord;

    #[test]
    fn preview_stops_after_max_rows() {
        let records = (1..=8)
            .map(|d| WeatherRecord {
                date: format!("2024-07-0{}", d),
                temperature: 28.0 + d as f64,
            })
            .collect();
        let table = WeatherTable::new(records).unwrap();
        let rows = preview_rows(&table, 5);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].date, "2024-07-05");

        let mut out = Vec::new();
        preview_table_rows(&mut out, &rows, 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("| Date"));
        assert!(text.contains("2024-07-05"));
        assert!(!text.contains("2024-07-06"));
        assert!(text.contains("33.0"));
    }
}
