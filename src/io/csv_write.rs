use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use tempfile::NamedTempFile;

use crate::error::{MapperError, Result};
use crate::model::{MailingRecord, OUTPUT_HEADERS};

/// Writes the mailing list to `path` as UTF-8 CSV with a header row.
///
/// Rows go to a temporary file beside `path` that is renamed over it only
/// after everything has been flushed, so a failed write leaves any previous
/// output intact.
pub fn write_mailing_list(path: &Path, records: &[MailingRecord]) -> Result<()> {
    let to_error = |source: csv::Error| MapperError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staging = NamedTempFile::new_in(dir).map_err(|err| to_error(err.into()))?;
    // Keep the mode of the file being replaced rather than the temp file's.
    match fs::metadata(path) {
        Ok(existing) if existing.is_file() => staging
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|err| to_error(err.into()))?,
        _ => {}
    }
    let mut writer = builder().from_writer(staging);
    write_records(&mut writer, records).map_err(to_error)?;
    let staging = writer
        .into_inner()
        .map_err(|err| to_error(err.into_error().into()))?;
    staging
        .persist(path)
        .map_err(|err| to_error(err.error.into()))?;
    Ok(())
}

/// Renders the header and the first `limit` records as CSV text.
pub fn render_preview(records: &[MailingRecord], limit: usize) -> Result<String> {
    let mut writer = builder().from_writer(Vec::new());
    write_records(&mut writer, &records[..limit.min(records.len())])
        .map_err(|err| MapperError::Io(err.into()))?;
    let bytes = writer
        .into_inner()
        .map_err(|err| MapperError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    // The header is written by hand so that an empty list still gets one.
    builder.has_headers(false);
    builder
}

fn write_records<W: Write>(
    writer: &mut Writer<W>,
    records: &[MailingRecord],
) -> std::result::Result<(), csv::Error> {
    writer.write_record(OUTPUT_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
