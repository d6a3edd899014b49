/// Header row plus data rows of a simple comma-separated document.
///
/// Quoting is not supported: every comma separates a field. Cells are
/// trimmed and short rows read as empty cells.
#[derive(Debug, Default, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse(text: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.trim().as_bytes());

        let headers: Vec<String> = match reader.headers() {
            Ok(record) => record.iter().map(str::to_string).collect(),
            Err(e) => {
                tracing::warn!("Failed to read CSV header row: {}", e);
                return Self::default();
            }
        };

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            match record {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                // +2: one for the header, one for 1-based line numbers
                Err(e) => tracing::warn!("Skipping unreadable CSV line {}: {}", index + 2, e),
            }
        }

        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching one of `aliases`.
    ///
    /// Exact spellings win over case-insensitive ones.
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        aliases
            .iter()
            .find_map(|alias| self.headers.iter().position(|h| h == alias))
            .or_else(|| {
                aliases.iter().find_map(|alias| {
                    self.headers.iter().position(|h| h.eq_ignore_ascii_case(alias))
                })
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.rows.iter().map(|cells| CsvRow { cells })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    cells: &'a [String],
}

impl<'a> CsvRow<'a> {
    /// Cell in `column`, empty when the column or the cell is missing.
    pub fn cell(&self, column: Option<usize>) -> &'a str {
        column
            .and_then(|index| self.cells.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_document_has_no_rows() {
        let table = CsvTable::parse("Nombre,Apellido\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_short_rows_read_as_empty_cells() {
        let table = CsvTable::parse("a,b,c\r\n1,2\r\n");
        let row = table.rows().next().expect("one row");
        assert_eq!(row.cell(table.column(&["a"])), "1");
        assert_eq!(row.cell(table.column(&["c"])), "");
    }

    #[test]
    fn test_column_lookup_falls_back_to_case_insensitive() {
        let table = CsvTable::parse("NOMBRE,apellido\nJuan,Perez");
        assert_eq!(table.column(&["Nombre"]), Some(0));
        assert_eq!(table.column(&["Apellido"]), Some(1));
        assert_eq!(table.column(&["Dorsal"]), None);
    }
}
