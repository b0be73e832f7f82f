use crate::domain::model::ExportRecord;
use crate::utils::error::{EtlError, Result};

/// CSV encoding of export rows.
pub struct CsvExporter;

impl CsvExporter {
    /// Encodes `records` with a header row, `\n` terminators and no index
    /// column. The header is written even when `records` is empty.
    pub fn to_bytes(records: &[ExportRecord]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(ExportRecord::HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }

        writer
            .into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Vec<ExportRecord>> {
        let mut reader = csv::Reader::from_reader(data);
        let records = reader.deserialize().collect::<csv::Result<Vec<ExportRecord>>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> ExportRecord {
        ExportRecord {
            cas_id: 7732185,
            cas_no: "7732-18-5".to_string(),
            chem_name: "Water".to_string(),
        }
    }

    #[test]
    fn test_header_only_for_empty_input() {
        let bytes = CsvExporter::to_bytes(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "cas_id,cas_no,chem_name\n");
    }

    #[test]
    fn test_single_row() {
        let bytes = CsvExporter::to_bytes(&[water()]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "cas_id,cas_no,chem_name\n7732185,7732-18-5,Water\n"
        );
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let record = ExportRecord {
            cas_id: 106978,
            cas_no: "106-97-8".to_string(),
            chem_name: "Butane, normal".to_string(),
        };
        let bytes = CsvExporter::to_bytes(&[record.clone()]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\"Butane, normal\""));
        assert_eq!(CsvExporter::from_bytes(&bytes).unwrap(), vec![record]);
    }

    #[test]
    fn test_read_back_matches() {
        let records = vec![
            water(),
            ExportRecord {
                cas_id: 74828,
                cas_no: "74-82-8".to_string(),
                chem_name: "Methane".to_string(),
            },
        ];
        let bytes = CsvExporter::to_bytes(&records).unwrap();
        assert_eq!(CsvExporter::from_bytes(&bytes).unwrap(), records);
    }
}
