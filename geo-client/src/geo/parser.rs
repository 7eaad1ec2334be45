use std::io::BufReader;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, instrument};

use crate::error::{GeoError, Result};
use crate::geo::models::GeoRecord;

/// Parse every DocSum element of an ESummary XML response
///
/// Each `<DocSum>` becomes one record: the `<Id>` child supplies the
/// identifier and every direct-child `<Item Name="...">` contributes a
/// field. Repeated item names are promoted into ordered lists; items
/// nested inside list-typed items are not fields of the record and are
/// skipped. Records are returned in document order.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_docsums(xml: &str) -> Result<Vec<GeoRecord>> {
    let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
    reader.config_mut().trim_text(true);

    let mut records: Vec<GeoRecord> = Vec::new();
    let mut current: Option<GeoRecord> = None;

    let mut in_id = false;
    // Depth of open <Item> elements below the current DocSum; only depth 1
    // items are record fields.
    let mut item_depth = 0usize;
    let mut current_item_name: Option<String> = None;
    let mut current_item_text = String::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"DocSum" => {
                    current = Some(GeoRecord::default());
                    item_depth = 0;
                }
                b"Id" if current.is_some() && item_depth == 0 => in_id = true,
                b"Item" if current.is_some() => {
                    item_depth += 1;
                    if item_depth == 1 {
                        current_item_name = item_name(e);
                        current_item_text.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                // Self-closing direct children store an empty value
                if e.name().as_ref() == b"Item" && item_depth == 0 {
                    if let Some(record) = current.as_mut() {
                        if let Some(name) = item_name(e) {
                            record.insert_field(name, "");
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| GeoError::XmlError(format!("failed to decode XML text: {err}")))?;

                if in_id {
                    if let Some(record) = current.as_mut() {
                        record.id = text.into_owned();
                    }
                } else if item_depth == 1 {
                    current_item_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"Id" => in_id = false,
                b"Item" => {
                    if item_depth == 1 {
                        if let Some(record) = current.as_mut() {
                            if let Some(name) = current_item_name.take() {
                                record.insert_field(name, std::mem::take(&mut current_item_text));
                            }
                        }
                    }
                    item_depth = item_depth.saturating_sub(1);
                }
                b"DocSum" => {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(GeoError::XmlError(format!("XML parsing error: {e}")));
            }
            _ => {}
        }
        buf.clear();
    }

    debug!(records = records.len(), "Parsed ESummary DocSums");
    Ok(records)
}

fn item_name(e: &BytesStart) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"Name")
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
