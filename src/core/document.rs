//! XLIFF document model, decoding and encoding.
//!
//! Only the parts of the format needed for string lookup are modelled:
//! file metadata, the header tool entry and translation units with their
//! source and target text. Unknown elements are skipped and missing ones
//! decode to empty values. Segment text is kept exactly as written.

use std::{
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Serialize;

use super::{
    error::{Result, XliffError},
    reader::DocumentReader,
};

/// Name used in decode errors when the input has no path.
const STREAM_NAME: &str = "<input>";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root `<xliff>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "xliff")]
pub struct Document {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "file")]
    pub files: Vec<File>,
}

/// One `<file>` element: the translations of a single source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    #[serde(rename = "@original")]
    pub original: String,
    #[serde(rename = "@source-language", skip_serializing_if = "String::is_empty")]
    pub source_language: String,
    #[serde(rename = "@datatype", skip_serializing_if = "String::is_empty")]
    pub datatype: String,
    #[serde(rename = "@target-language", skip_serializing_if = "String::is_empty")]
    pub target_language: String,
    pub header: Header,
    pub body: Body,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub tool: Tool,
}

/// Tool that produced the file. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tool {
    #[serde(rename = "@tool-id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "@tool-name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "@tool-version", skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(rename = "@build-num", skip_serializing_if = "String::is_empty")]
    pub build_num: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Body {
    #[serde(rename = "trans-unit")]
    pub trans_units: Vec<TransUnit>,
}

/// A `<trans-unit>`: one identifier with its source and target text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransUnit {
    #[serde(rename = "@id")]
    pub id: String,
    /// Raw `approved` attribute (`yes`/`no`), empty when absent.
    #[serde(rename = "@approved", skip_serializing_if = "String::is_empty")]
    pub approved: String,
    pub source: Segment,
    pub target: Segment,
}

impl TransUnit {
    pub fn is_approved(&self) -> bool {
        self.approved == "yes"
    }
}

/// Text content of `<source>` or `<target>` plus its optional language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segment {
    #[serde(rename = "@lang", skip_serializing_if = "String::is_empty")]
    pub lang: String,
    #[serde(rename = "$text")]
    pub text: String,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lang: String::new(),
            text: text.into(),
        }
    }

    pub fn with_lang(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

impl Document {
    /// Iterate every translation unit of every file, in document order.
    pub fn trans_units(&self) -> impl Iterator<Item = &TransUnit> {
        self.files.iter().flat_map(|file| file.body.trans_units.iter())
    }
}

/// Decode a document from a byte stream.
pub fn parse_document<R: BufRead>(reader: R) -> Result<Document> {
    decode(reader, Path::new(STREAM_NAME))
}

/// Open `path` and decode it as a document.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| XliffError::io(path, e))?;

    decode(BufReader::new(file), path)
}

fn decode<R: BufRead>(reader: R, path: &Path) -> Result<Document> {
    DocumentReader::new(reader)
        .read_document()
        .map_err(|source| XliffError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode a document, prefixed with an XML declaration.
///
/// Empty optional attributes are omitted, so they decode back to empty strings.
pub fn to_xml_string(doc: &Document) -> Result<String> {
    let body = quick_xml::se::to_string(doc).map_err(|e| XliffError::Encode(e.to_string()))?;
    Ok(format!("{}\n{}", XML_DECLARATION, body))
}
