use crate::domain::cas::{check_digit_is_valid, ShortIdPolicy, MIN_CAS_DIGITS};
use crate::domain::model::{ExportRecord, Material, Record};
use crate::utils::error::Result;

/// Short identifiers carry no real check digit, so they are never flagged.
fn has_suspect_check_digit(cas_id: u64) -> bool {
    cas_id.to_string().len() >= MIN_CAS_DIGITS && !check_digit_is_valid(cas_id)
}

/// Maps catalog records to export rows, one per input, in input order.
///
/// The first record that fails aborts the batch; no partial result is
/// returned.
pub fn build_export_records(records: &[Record], policy: ShortIdPolicy) -> Result<Vec<ExportRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let material = Material::from_record(index, record)?;
            let export = ExportRecord::from_material(material, policy)?;
            if has_suspect_check_digit(export.cas_id) {
                tracing::warn!(
                    "Material #{} ({}) has CAS id {} with a mismatched check digit",
                    index,
                    export.chem_name,
                    export.cas_id
                );
            }
            Ok(export)
        })
        .collect()
}
