use std::path::Path;

use crate::error::Result;

/// Read a CSV file into rows of strings. Ragged records are padded so every
/// row has the width of the widest one.
pub fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }

    Ok(rows)
}

/// Write cells to a CSV file, leaving out empty trailing rows and columns.
pub fn write_csv(path: &Path, cells: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    if let Some((max_row, max_col)) = used_bounds(cells) {
        for row in &cells[..=max_row] {
            let record: Vec<&str> = (0..=max_col)
                .map(|col| row.get(col).map(String::as_str).unwrap_or(""))
                .collect();
            writer.write_record(&record)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Last row and column holding a non-empty cell.
fn used_bounds(cells: &[Vec<String>]) -> Option<(usize, usize)> {
    let mut bounds: Option<(usize, usize)> = None;

    for (row_idx, row) in cells.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                let (max_row, max_col) = bounds.unwrap_or((0, 0));
                bounds = Some((max_row.max(row_idx), max_col.max(col_idx)));
            }
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn ragged_rows_are_padded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\nd\n").unwrap();
        assert_eq!(read_csv(&path).unwrap(), grid(&[&["a", "b", "c"], &["d", "", ""]]));
    }

    #[test]
    fn trailing_empty_cells_are_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let cells = grid(&[&["a", "", ""], &["", "b", ""], &["", "", ""]]);
        write_csv(&path, &cells).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,\n,b\n");
    }

    #[test]
    fn empty_grid_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_csv(&path, &grid(&[&["", ""]])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        assert_eq!(read_csv(&path).unwrap(), Vec::<Vec<String>>::new());
    }

    #[test]
    fn quoting_survives_a_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let cells = grid(&[&["a,b", "line\nbreak", "say \"hi\""]]);
        write_csv(&path, &cells).unwrap();
        assert_eq!(read_csv(&path).unwrap(), cells);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_csv(&dir.path().join("nope.csv")).is_err());
    }
}
