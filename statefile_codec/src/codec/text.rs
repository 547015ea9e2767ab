use crate::codec::{write_fixed, WriteLen};
use crate::error::CodecError;
use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

/// Marker recognized inside a text directive; the field value's rendering is
/// substituted for it. Reserved in composite labels, which synthesize their
/// own sub-labels around it.
pub const TEMPLATE_MARKER: &str = "{}";

/// Renders one field as human-readable text and writes it through the same
/// raw byte sink as binary output. An empty directive suppresses the field
/// entirely; a directive holding exactly one [`TEMPLATE_MARKER`] is used
/// verbatim as a template; any other directive becomes a `name = value`
/// line. Truncation is checked against the rendered string's own length.
pub(crate) fn write_text_field<W: Write, T: Display>(
    w: &mut W,
    value: &T,
    directive: &str,
) -> Result<WriteLen> {
    if directive.is_empty() {
        return Ok(WriteLen(0));
    }
    let message = render_directive(value, directive)?;
    let w_len = write_fixed(w, message.as_bytes())?;
    Ok(WriteLen(w_len))
}

fn render_directive<T: Display>(value: &T, directive: &str) -> Result<String> {
    match directive.matches(TEMPLATE_MARKER).count() {
        0 => Ok(format!("{directive} = {value}\n")),
        1 => Ok(directive.replacen(TEMPLATE_MARKER, &value.to_string(), 1)),
        _ => Err(CodecError::TemplateFormat {
            directive: String::from(directive),
        }
        .into()),
    }
}
