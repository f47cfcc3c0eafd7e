//! Event-based decoder for XLIFF documents.
//!
//! Text inside `<source>` and `<target>` is kept verbatim, whitespace
//! included. Only character data directly inside those elements is
//! collected: inline markup such as `<g>`, `<x/>` or `<ph>` is skipped
//! together with its content. Any other unknown element is skipped as well.

use std::io::BufRead;

use quick_xml::{
    DeError, Reader,
    events::{BytesStart, Event},
};

use super::document::{Body, Document, File, Header, Segment, Tool, TransUnit};

type DecodeResult<T> = std::result::Result<T, DeError>;

/// What the reader found next inside the current element.
enum Child {
    /// A child element, and whether it was self-closing.
    Element(BytesStart<'static>, bool),
    Text(String),
    /// The end tag of the current element.
    End,
}

pub(crate) struct DocumentReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> DocumentReader<R> {
    pub(crate) fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
        }
    }

    /// Decode the `<xliff>` root element.
    pub(crate) fn read_document(mut self) -> DecodeResult<Document> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return self.read_root(&start, false),
                Event::Empty(start) => return self.read_root(&start, true),
                Event::Eof => return Err(DeError::Custom("missing <xliff> root element".into())),
                _ => {}
            }
        }
    }

    fn read_root(&mut self, start: &BytesStart<'_>, empty: bool) -> DecodeResult<Document> {
        if start.local_name().as_ref() != b"xliff" {
            return Err(DeError::Custom(format!(
                "expected <xliff> root element, found <{}>",
                String::from_utf8_lossy(start.name().as_ref())
            )));
        }

        let mut doc = Document::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"version" => doc.version = value,
                b"xmlns" => doc.xmlns = value,
                _ => {}
            }
        }
        if empty {
            return Ok(doc);
        }

        loop {
            match self.next_child()? {
                Child::Element(start, empty) if start.local_name().as_ref() == b"file" => {
                    let file = self.read_file(&start, empty)?;
                    doc.files.push(file);
                }
                Child::Element(_, empty) => self.skip(empty)?,
                Child::Text(_) => {}
                Child::End => return Ok(doc),
            }
        }
    }

    fn read_file(&mut self, start: &BytesStart<'_>, empty: bool) -> DecodeResult<File> {
        let mut file = File::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"original" => file.original = value,
                b"source-language" => file.source_language = value,
                b"datatype" => file.datatype = value,
                b"target-language" => file.target_language = value,
                _ => {}
            }
        }
        if empty {
            return Ok(file);
        }

        loop {
            match self.next_child()? {
                Child::Element(start, empty) => match start.local_name().as_ref() {
                    b"header" => file.header = self.read_header(empty)?,
                    b"body" => file.body = self.read_body(empty)?,
                    _ => self.skip(empty)?,
                },
                Child::Text(_) => {}
                Child::End => return Ok(file),
            }
        }
    }

    fn read_header(&mut self, empty: bool) -> DecodeResult<Header> {
        let mut header = Header::default();
        if empty {
            return Ok(header);
        }

        loop {
            match self.next_child()? {
                Child::Element(start, empty) if start.local_name().as_ref() == b"tool" => {
                    header.tool = read_tool(&start)?;
                    self.skip(empty)?;
                }
                Child::Element(_, empty) => self.skip(empty)?,
                Child::Text(_) => {}
                Child::End => return Ok(header),
            }
        }
    }

    fn read_body(&mut self, empty: bool) -> DecodeResult<Body> {
        let mut body = Body::default();
        if empty {
            return Ok(body);
        }

        loop {
            match self.next_child()? {
                Child::Element(start, empty) if start.local_name().as_ref() == b"trans-unit" => {
                    let unit = self.read_trans_unit(&start, empty)?;
                    body.trans_units.push(unit);
                }
                Child::Element(_, empty) => self.skip(empty)?,
                Child::Text(_) => {}
                Child::End => return Ok(body),
            }
        }
    }

    fn read_trans_unit(&mut self, start: &BytesStart<'_>, empty: bool) -> DecodeResult<TransUnit> {
        let mut unit = TransUnit::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => unit.id = value,
                b"approved" => unit.approved = value,
                _ => {}
            }
        }
        if empty {
            return Ok(unit);
        }

        loop {
            match self.next_child()? {
                Child::Element(start, empty) => match start.local_name().as_ref() {
                    b"source" => unit.source = self.read_segment(&start, empty)?,
                    b"target" => unit.target = self.read_segment(&start, empty)?,
                    _ => self.skip(empty)?,
                },
                Child::Text(_) => {}
                Child::End => return Ok(unit),
            }
        }
    }

    fn read_segment(&mut self, start: &BytesStart<'_>, empty: bool) -> DecodeResult<Segment> {
        let mut segment = Segment::default();
        // `xml:lang` has the local name `lang` as well.
        for (key, value) in attributes(start)? {
            if key == b"lang" {
                segment.lang = value;
            }
        }
        if empty {
            return Ok(segment);
        }

        loop {
            match self.next_child()? {
                Child::Element(_, empty) => self.skip(empty)?,
                Child::Text(text) => segment.text.push_str(&text),
                Child::End => return Ok(segment),
            }
        }
    }

    fn next_child(&mut self) -> DecodeResult<Child> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok(Child::Element(start, false)),
                Event::Empty(start) => return Ok(Child::Element(start, true)),
                Event::Text(text) => return Ok(Child::Text(text.unescape()?.into_owned())),
                Event::CData(data) => {
                    return Ok(Child::Text(String::from_utf8_lossy(&data).into_owned()));
                }
                Event::End(_) => return Ok(Child::End),
                Event::Eof => return Err(unexpected_eof()),
                // Comments, processing instructions, declarations.
                _ => {}
            }
        }
    }

    /// Consume the element just opened, including everything nested in it.
    fn skip(&mut self, empty: bool) -> DecodeResult<()> {
        if empty {
            return Ok(());
        }

        let mut depth = 1usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Event::Eof => return Err(unexpected_eof()),
                _ => {}
            }
        }
    }

    fn next_event(&mut self) -> DecodeResult<Event<'static>> {
        let event = self.reader.read_event_into(&mut self.buf)?.into_owned();
        self.buf.clear();
        Ok(event)
    }
}

fn read_tool(start: &BytesStart<'_>) -> DecodeResult<Tool> {
    let mut tool = Tool::default();
    for (key, value) in attributes(start)? {
        match key.as_slice() {
            b"tool-id" => tool.id = value,
            b"tool-name" => tool.name = value,
            b"tool-version" => tool.version = value,
            b"build-num" => tool.build_num = value,
            _ => {}
        }
    }
    Ok(tool)
}

/// Unescaped attributes of `start`, keyed by local name.
fn attributes(start: &BytesStart<'_>) -> DecodeResult<Vec<(Vec<u8>, String)>> {
    let mut result = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?.into_owned();
        result.push((attr.key.local_name().as_ref().to_vec(), value));
    }
    Ok(result)
}

fn unexpected_eof() -> DeError {
    DeError::Custom("unexpected end of document".into())
}
