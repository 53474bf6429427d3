//! Shared quick-xml helpers.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Write `<name attrs..>text</name>`.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(start(name, attrs)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn open<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Start(start(name, attrs)))?;
    Ok(())
}

pub fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn empty<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Empty(start(name, attrs)))?;
    Ok(())
}

fn start<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut node = BytesStart::new(name);
    for attr in attrs {
        node.push_attribute(*attr);
    }
    node
}
