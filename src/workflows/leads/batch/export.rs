use super::LeadReportRow;
use std::io::Write;

pub(crate) const HEADERS: [&str; 8] = [
    "Company",
    "Score",
    "Summary",
    "Industry",
    "Revenue",
    "EBITDA",
    "Employees",
    "Contact",
];

/// Header row is always written, even for an empty batch.
pub(crate) fn write_rows<W: Write>(writer: W, rows: &[LeadReportRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
