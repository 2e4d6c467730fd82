use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::config::MapperConfig;
use crate::error::Result;
use crate::io::blocklist::Blocklists;
use crate::io::{csv_read, csv_write};
use crate::model::{ContactRecord, MailingRecord, Summary};
use crate::normalize::{dedup_key, normalize_conjunction, normalize_country, title_case};

/// The finished mailing list together with its row counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedList {
    pub records: Vec<MailingRecord>,
    pub summary: Summary,
}

/// Loads the blocklists named by `config`, then maps `input` into `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn run(input: &Path, output: &Path, config: &MapperConfig) -> Result<MappedList> {
    let blocklists = Blocklists::load_from_dir(&config.blocklist_dir)?;
    map_records(input, output, &blocklists)
}

/// Reads the contact export, builds the mailing list and writes it.
///
/// The output file is only replaced once the whole table has been built and
/// written in full, so any failure leaves an existing file in place.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn map_records(input: &Path, output: &Path, blocklists: &Blocklists) -> Result<MappedList> {
    info!("reading contact export");
    let contacts = csv_read::read_contacts(input)?;
    let mapped = map_table(&contacts, blocklists);
    csv_write::write_mailing_list(output, &mapped.records)?;

    let summary = mapped.summary;
    info!(
        input_rows = summary.input_rows,
        filtered_out = summary.filtered_out(),
        duplicates_removed = summary.duplicates_removed(),
        output_rows = summary.after_dedup,
        "mailing list written"
    );
    if let Ok(json) = serde_json::to_string(&summary) {
        debug!(summary = %json, "mapping summary");
    }
    Ok(mapped)
}

/// Applies the blocklist filter, field normalization and address
/// deduplication to an in-memory contact table.
pub fn map_table(contacts: &[ContactRecord], blocklists: &Blocklists) -> MappedList {
    let mut summary = Summary {
        input_rows: contacts.len(),
        ..Summary::default()
    };

    // Blocklists match the raw export spelling, before the " and " rewrite.
    let kept: Vec<&ContactRecord> = contacts
        .iter()
        .filter(|contact| {
            contact
                .full_name
                .as_deref()
                .is_none_or(|name| !blocklists.blocks_name(name))
        })
        .collect();
    summary.after_filter = kept.len();

    summary.blocked_emails = kept
        .iter()
        .filter_map(|contact| contact.email_address.as_deref())
        .filter(|email| blocklists.blocks_email(email.trim()))
        .count();
    if summary.blocked_emails > 0 {
        debug!(
            blocked_emails = summary.blocked_emails,
            "rows carry blocklisted emails; email column is left empty"
        );
    }

    let mut seen = HashSet::new();
    let records: Vec<MailingRecord> = kept
        .into_iter()
        .map(to_mailing_record)
        .filter(|record| {
            seen.insert(dedup_key(
                record.full_name.as_deref(),
                record.address_1.as_deref(),
                record.city.as_deref(),
            ))
        })
        .collect();
    summary.after_dedup = records.len();

    MappedList { records, summary }
}

/// Projects a single contact onto the vendor's column layout.
pub fn to_mailing_record(contact: &ContactRecord) -> MailingRecord {
    MailingRecord {
        full_name: contact.full_name.as_deref().map(normalize_conjunction),
        country: normalize_country(contact.country.as_deref()),
        company: None,
        address_1: contact.address_line_1.as_deref().map(title_case),
        address_2: contact.address_line_2.as_deref().map(title_case),
        address_3: None,
        city: contact.city.as_deref().map(title_case),
        state: contact.state.clone(),
        zip_code: contact.postal_code.clone(),
        phone_number: None,
        email: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, address: &str, city: &str) -> ContactRecord {
        ContactRecord {
            full_name: Some(name.to_string()),
            address_line_1: Some(address.to_string()),
            city: Some(city.to_string()),
            ..ContactRecord::default()
        }
    }

    fn blocklists(dupes: &[&str], no_mail: &[&str]) -> Blocklists {
        Blocklists {
            known_dupe_names: dupes.iter().map(|name| name.to_string()).collect(),
            drop_emails: HashSet::new(),
            drop_mail_names: no_mail.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn contact_is_projected_onto_vendor_columns() {
        let source = ContactRecord {
            full_name: Some("Jo and Ann Smith".into()),
            country: Some("Us".into()),
            address_line_1: Some("123 MAIN st".into()),
            address_line_2: Some("unit #4".into()),
            city: Some("austin".into()),
            state: Some("TX".into()),
            postal_code: Some("78701".into()),
            email_address: Some("jo@example.com".into()),
        };

        let record = to_mailing_record(&source);
        assert_eq!(record.full_name.as_deref(), Some("Jo & Ann Smith"));
        assert_eq!(record.country, "USA");
        assert_eq!(record.address_1.as_deref(), Some("123 Main St"));
        assert_eq!(record.address_2.as_deref(), Some("Unit #4"));
        assert_eq!(record.city.as_deref(), Some("Austin"));
        assert_eq!(record.state.as_deref(), Some("TX"));
        assert_eq!(record.zip_code.as_deref(), Some("78701"));
        assert_eq!(record.company, None);
        assert_eq!(record.address_3, None);
        assert_eq!(record.phone_number, None);
        assert_eq!(record.email, None);
    }

    #[test]
    fn blocklisted_names_are_dropped_before_conjunction_rewrite() {
        let contacts = vec![
            contact("Dupe Person", "1 Elm", "Austin"),
            contact("Quiet Person", "2 Elm", "Austin"),
            contact("Al and Bo", "3 Elm", "Austin"),
            contact("Keep Me", "4 Elm", "Austin"),
        ];
        let lists = blocklists(&["Dupe Person", "Al & Bo"], &["Quiet Person"]);

        let mapped = map_table(&contacts, &lists);
        let names: Vec<_> = mapped
            .records
            .iter()
            .filter_map(|record| record.full_name.as_deref())
            .collect();
        assert_eq!(names, vec!["Al & Bo", "Keep Me"]);
        assert!(lists.blocks_name("Al & Bo"));
        assert_eq!(mapped.summary.filtered_out(), 2);
    }

    #[test]
    fn name_filter_is_case_sensitive() {
        let contacts = vec![contact("dupe person", "1 Elm", "Austin")];
        let mapped = map_table(&contacts, &blocklists(&["Dupe Person"], &[]));
        assert_eq!(mapped.records.len(), 1);
    }

    #[test]
    fn duplicate_addresses_keep_first_occurrence() {
        let mut first = contact("Jo Smith", "123 main st", "austin");
        first.state = Some("TX".into());
        let mut second = contact("JO SMITH", "123 MAIN ST", "AUSTIN");
        second.state = Some("CA".into());
        let other_city = contact("Jo Smith", "123 main st", "dallas");

        let mapped = map_table(&[first, second, other_city], &Blocklists::default());
        assert_eq!(mapped.records.len(), 2);
        assert_eq!(mapped.records[0].state.as_deref(), Some("TX"));
        assert_eq!(mapped.records[1].city.as_deref(), Some("Dallas"));
        assert_eq!(mapped.summary.duplicates_removed(), 1);
    }

    #[test]
    fn rows_without_any_key_fields_collapse_together() {
        let mapped = map_table(
            &[ContactRecord::default(), ContactRecord::default()],
            &Blocklists::default(),
        );
        assert_eq!(mapped.records.len(), 1);
        assert_eq!(mapped.records[0].country, "USA");
    }

    #[test]
    fn blocklisted_emails_are_counted_but_never_written() {
        let mut flagged = contact("Jo Smith", "1 Elm", "Austin");
        flagged.email_address = Some("spam@example.com".into());
        let mut lists = Blocklists::default();
        lists.drop_emails.insert("spam@example.com".into());

        let mapped = map_table(&[flagged], &lists);
        assert_eq!(mapped.summary.blocked_emails, 1);
        assert_eq!(mapped.records.len(), 1);
        assert_eq!(mapped.records[0].email, None);
    }
}
