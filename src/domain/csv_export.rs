//! CSV reports over an in-memory registration list.
//!
//! Every field, header included, is wrapped in double quotes and embedded
//! quotes are doubled, so any participant input survives a round trip.
//! Rows end with `\n`.

use chrono::{DateTime, NaiveDate, Utc};

use super::catalog;
use super::registration::Registration;
use crate::error::PortalError;

const ALL_HEADERS: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "College",
    "Roll Number",
    "Section",
    "Events",
    "Total Amount",
    "Registration Date",
];

const EVENT_HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "College",
    "Roll Number",
    "Section",
    "Registration Date",
];

/// Rendered CSV text together with the filename it should be saved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested download filename.
    pub filename: String,
    /// UTF-8 CSV text.
    pub content: String,
    /// Number of data rows (header excluded).
    pub row_count: usize,
}

/// Renders every registration, in the given order, dated today (UTC).
///
/// # Errors
///
/// Returns [`PortalError::Internal`] if the CSV writer fails.
pub fn export_all(registrations: &[Registration]) -> Result<CsvExport, PortalError> {
    export_all_on(registrations, Utc::now().date_naive())
}

/// Renders every registration with a filename stamped with `date`.
///
/// # Errors
///
/// Returns [`PortalError::Internal`] if the CSV writer fails.
pub fn export_all_on(
    registrations: &[Registration],
    date: NaiveDate,
) -> Result<CsvExport, PortalError> {
    let mut writer = new_writer();
    writer.write_record(ALL_HEADERS).map_err(csv_error)?;
    for reg in registrations {
        let events = reg
            .selected_events
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let p = &reg.participant;
        writer
            .write_record([
                p.name.as_str(),
                p.email.as_str(),
                p.phone.as_str(),
                p.college.as_str(),
                p.roll_number.as_str(),
                p.section.as_str(),
                events.as_str(),
                reg.total_amount.to_string().as_str(),
                format_date(reg.registration_date).as_str(),
            ])
            .map_err(csv_error)?;
    }

    Ok(CsvExport {
        filename: all_registrations_filename(date),
        content: finish(writer)?,
        row_count: registrations.len(),
    })
}

/// Renders the participants of the event whose display name equals
/// `event_name` exactly.
///
/// # Errors
///
/// Returns [`PortalError::Internal`] if the CSV writer fails.
pub fn export_for_event(
    registrations: &[Registration],
    event_name: &str,
) -> Result<CsvExport, PortalError> {
    render_participants(
        registrations.iter().filter(|r| r.has_event_named(event_name)),
        event_name,
    )
}

/// Renders the participants of the event with catalog id `event_id`.
///
/// The filename uses the name recorded on the first matching snapshot,
/// falling back to the catalog name and then to the id itself.
///
/// # Errors
///
/// Returns [`PortalError::Internal`] if the CSV writer fails.
pub fn export_for_event_id(
    registrations: &[Registration],
    event_id: &str,
) -> Result<CsvExport, PortalError> {
    let recorded_name = registrations
        .iter()
        .flat_map(|r| &r.selected_events)
        .find(|e| e.id == event_id)
        .map(|e| e.name.as_str());
    let name = recorded_name
        .or_else(|| catalog::find(event_id).map(|e| e.name))
        .unwrap_or(event_id);

    render_participants(
        registrations.iter().filter(|r| r.has_event_id(event_id)),
        name,
    )
}

fn render_participants<'a>(
    registrations: impl Iterator<Item = &'a Registration>,
    event_name: &str,
) -> Result<CsvExport, PortalError> {
    let mut writer = new_writer();
    writer.write_record(EVENT_HEADERS).map_err(csv_error)?;
    let mut row_count = 0;
    for reg in registrations {
        let p = &reg.participant;
        writer
            .write_record([
                p.name.as_str(),
                p.email.as_str(),
                p.phone.as_str(),
                p.college.as_str(),
                p.roll_number.as_str(),
                p.section.as_str(),
                format_date(reg.registration_date).as_str(),
            ])
            .map_err(csv_error)?;
        row_count += 1;
    }

    Ok(CsvExport {
        filename: event_filename(event_name),
        content: finish(writer)?,
        row_count,
    })
}

/// `registrations_YYYY-MM-DD.csv`
#[must_use]
pub fn all_registrations_filename(date: NaiveDate) -> String {
    format!("registrations_{}.csv", date.format("%Y-%m-%d"))
}

/// Event name with each run of whitespace collapsed to one underscore,
/// suffixed with `_participants.csv`.
#[must_use]
pub fn event_filename(event_name: &str) -> String {
    let mut stem = String::with_capacity(event_name.len());
    let mut in_space = false;
    for ch in event_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    format!("{stem}_participants.csv")
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn new_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, PortalError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| PortalError::Internal(format!("csv flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| PortalError::Internal(format!("csv is not utf-8: {e}")))
}

fn csv_error(err: csv::Error) -> PortalError {
    PortalError::Internal(format!("csv write failed: {err}"))
}
