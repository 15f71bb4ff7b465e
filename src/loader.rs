use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::{io, path::Path};
use tracing::info;

use crate::model::{Dataset, Header};

/// A header line plus the data rows beneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Every column name, the label column included.
    pub header: Header,
    pub rows: Dataset,
}

impl Table {
    /// Column names of the feature columns only.
    pub fn feature_header(&self) -> &[String] {
        match self.header.split_last() {
            Some((_, features)) => features,
            None => &[],
        }
    }
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let table = read(file).with_context(|| format!("could not parse {}", path.display()))?;

    info!(
        path = %path.display(),
        rows = table.rows.len(),
        "loaded dataset"
    );
    Ok(table)
}

/// Parses comma separated records. Blank lines are skipped by the reader;
/// row lengths are not checked here so that training and evaluation can
/// report which row is off.
pub fn read<R: io::Read>(source: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let header = reader
        .headers()
        .context("csv source is missing its header line")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let source = "Gender,Married,Segment\nMale, Yes ,A\n\nFemale,No,B\n";
        let table = read(source.as_bytes()).unwrap();

        assert_eq!(table.header, ["Gender", "Married", "Segment"]);
        assert_eq!(table.feature_header(), ["Gender", "Married"]);
        assert_eq!(table.rows, vec![vec!["Male", "Yes", "A"], vec!["Female", "No", "B"]]);
    }

    #[test]
    fn keeps_ragged_rows() {
        let table = read("a,b,label\n1,2,x\n1,x\n".as_bytes()).unwrap();
        assert_eq!(table.rows[1].len(), 2);
    }

    #[test]
    fn keeps_rows_of_empty_fields() {
        let table = read("a,b,label\n1,2,x\n,,\n".as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], ["", "", ""]);

        let model = crate::train(&table.rows).unwrap();
        assert_eq!(model.labels(), ["x", ""]);
    }

    #[test]
    fn header_only_gives_no_rows() {
        let table = read("a,label\n".as_bytes()).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load("/nonexistent/training.csv").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/training.csv"));
    }
}
