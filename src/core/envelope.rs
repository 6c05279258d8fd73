//! Reader for the single-element `<string>…</string>` XML envelope
//!
//! The translator API wraps every scalar result in one element named `string`,
//! usually carrying the serialization namespace:
//!
//! ```xml
//! <string xmlns="http://schemas.microsoft.com/2003/10/Serialization/">fr</string>
//! ```

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::errors::{Result, TranslatorError};

/// Local name of the envelope root element
pub const ENVELOPE_ELEMENT: &str = "string";

/// Extract the character data of the envelope root element.
///
/// Anything before the root (declaration, comments, stray text) is skipped and
/// anything after its end tag is ignored. Text inside nested elements does not
/// count towards the result. Whitespace is kept as sent.
pub fn parse_string_envelope(body: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut value = String::new();
    // 0 until the root opens, then the current element depth
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if depth == 0 {
                    check_root_name(e.local_name().as_ref())?;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    check_root_name(e.local_name().as_ref())?;
                    return Ok(value);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(value);
                }
            }
            Event::Text(e) if depth == 1 => {
                value.push_str(&e.unescape()?);
            }
            Event::CData(e) if depth == 1 => {
                let raw = e.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|err| quick_xml::Error::NonDecodable(Some(err)))?;
                value.push_str(text);
            }
            Event::Eof => {
                if depth == 0 {
                    return Err(TranslatorError::EmptyEnvelope);
                }
                return Err(quick_xml::Error::UnexpectedEof(ENVELOPE_ELEMENT.to_string()).into());
            }
            _ => {}
        }
        buf.clear();
    }
}

fn check_root_name(name: &[u8]) -> Result<()> {
    if name == ENVELOPE_ELEMENT.as_bytes() {
        Ok(())
    } else {
        Err(TranslatorError::UnexpectedElement {
            expected: ENVELOPE_ELEMENT.to_string(),
            found: String::from_utf8_lossy(name).into_owned(),
        })
    }
}
