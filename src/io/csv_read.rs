use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{MapperError, Result};
use crate::model::ContactRecord;

/// Source columns the mapper knows how to use. Any subset may be present.
pub const EXPECTED_COLUMNS: [&str; 7] = [
    "full_name",
    "country",
    "address_line_1",
    "address_line_2",
    "city",
    "state",
    "postal_code",
];

const EMAIL_COLUMN: &str = "email_address";

/// Reads every row of the contact export at `path` into memory.
pub fn read_contacts(path: &Path) -> Result<Vec<ContactRecord>> {
    if !path.exists() {
        return Err(MapperError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    parse_contacts(file)
}

/// Parses a comma-separated export with a header row. Columns are located by
/// name, so order and unrelated columns do not matter.
pub fn parse_contacts<R: Read>(reader: R) -> Result<Vec<ContactRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers);

    let mut contacts = Vec::new();
    for result in reader.records() {
        let record = result?;
        contacts.push(columns.contact(&record));
    }

    debug!(row_count = contacts.len(), "contact export parsed");
    Ok(contacts)
}

/// Header positions of the known columns, `None` when a column is absent.
#[derive(Debug, Default)]
struct ColumnIndex {
    full_name: Option<usize>,
    country: Option<usize>,
    address_line_1: Option<usize>,
    address_line_2: Option<usize>,
    city: Option<usize>,
    state: Option<usize>,
    postal_code: Option<usize>,
    email_address: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);

        let missing: Vec<&str> = EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "input lacks expected columns; their fields will be empty");
        }

        Self {
            full_name: position("full_name"),
            country: position("country"),
            address_line_1: position("address_line_1"),
            address_line_2: position("address_line_2"),
            city: position("city"),
            state: position("state"),
            postal_code: position("postal_code"),
            email_address: position(EMAIL_COLUMN),
        }
    }

    fn contact(&self, record: &StringRecord) -> ContactRecord {
        let cell = |index: Option<usize>| index.and_then(|idx| record.get(idx)).and_then(non_empty);

        ContactRecord {
            full_name: cell(self.full_name),
            country: cell(self.country),
            address_line_1: cell(self.address_line_1),
            address_line_2: cell(self.address_line_2),
            city: cell(self.city),
            state: cell(self.state),
            postal_code: cell(self.postal_code),
            email_address: cell(self.email_address),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
