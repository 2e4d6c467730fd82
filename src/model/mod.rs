use serde::Serialize;

/// Column order of the mailing-list file handed to the print vendor.
pub const OUTPUT_HEADERS: [&str; 11] = [
    "Full Name",
    "Country",
    "Company",
    "Address 1",
    "Address 2 (e.g. Unit #)",
    "Address 3",
    "City",
    "State",
    "Zip Code",
    "Phone Number",
    "Email",
];

/// One row of the contact export. Every field is optional because the export
/// may omit any of the expected columns, and empty cells are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub full_name: Option<String>,
    pub country: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Only consulted for blocklist diagnostics; never copied to the output.
    pub email_address: Option<String>,
}

/// One row of the mailing list.
///
/// Company, Address 3, Phone Number and Email are placeholders that the
/// vendor template expects but that are filled in by hand downstream, so the
/// mapper always leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MailingRecord {
    #[serde(rename = "Full Name")]
    pub full_name: Option<String>,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Address 1")]
    pub address_1: Option<String>,
    #[serde(rename = "Address 2 (e.g. Unit #)")]
    pub address_2: Option<String>,
    #[serde(rename = "Address 3")]
    pub address_3: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Zip Code")]
    pub zip_code: Option<String>,
    #[serde(rename = "Phone Number")]
    pub phone_number: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
}

/// Row counts collected while mapping, used for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rows read from the input table.
    pub input_rows: usize,
    /// Rows left after the blocklist filter.
    pub after_filter: usize,
    /// Rows left after address deduplication; equals the output row count.
    pub after_dedup: usize,
    /// Rows passing the name filter whose source email is on the email
    /// blocklist. Emails are never written, so this is informational.
    pub blocked_emails: usize,
}

impl Summary {
    pub fn filtered_out(&self) -> usize {
        self.input_rows - self.after_filter
    }

    pub fn duplicates_removed(&self) -> usize {
        self.after_filter - self.after_dedup
    }
}
