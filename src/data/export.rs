use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Encode a dataset as UTF-8 CSV: header row, then data rows, no index
/// column. Quoting only where a cell needs it.
pub fn to_csv_bytes(dataset: &Dataset) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&dataset.columns)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Write already-encoded bytes to `path`.
pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_bytes;

    fn table() -> Dataset {
        Dataset {
            columns: vec!["note".into(), "length".into(), "Prédiction".into()],
            rows: vec![
                vec!["plain".into(), "113.5".into(), "Vrai".into()],
                vec!["with, comma".into(), "111".into(), "Faux".into()],
                vec!["say \"hi\"".into(), "".into(), "Faux".into()],
            ],
        }
    }

    #[test]
    fn encodes_without_index_and_with_minimal_quoting() {
        let bytes = to_csv_bytes(&table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "note,length,Prédiction\nplain,113.5,Vrai\n\"with, comma\",111,Faux\n\"say \"\"hi\"\"\",,Faux\n"
        );
    }

    #[test]
    fn reparsing_yields_the_same_table() {
        let ds = table();
        let bytes = to_csv_bytes(&ds).unwrap();
        assert_eq!(load_bytes(&bytes).unwrap(), ds);
    }

    #[test]
    fn save_bytes_writes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions_nif.csv");
        save_bytes(&path, "a\né\n".as_bytes()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\né\n");
    }
}
