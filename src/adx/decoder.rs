//! State machine turning `quick-xml` events into a [`Document`].

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    builder::DocumentBuilder,
    decoder::Decoder,
    document::{DecodeConfig, Document},
    error::{Error, Result},
    field::{APP, Field, USERDEF, attr},
};

const ADX: &str = "ADX";
const HEADER: &str = "HEADER";
const RECORDS: &str = "RECORDS";
const RECORD: &str = "RECORD";

fn is_structural(name: &str) -> bool {
    matches!(name, ADX | HEADER | RECORDS | RECORD)
}

/// Decoder for the XML-based ADX format.
///
/// Scope is tracked with an explicit stack of open element names: a
/// `USERDEF` element is a declaration inside `HEADER` and a value anywhere
/// else.
#[derive(Debug)]
pub struct AdxDecoder<'a> {
    input: &'a str,
    normalize_newlines: bool,
    builder: DocumentBuilder,
    stack: Vec<String>,
    field: Option<Field>,
}

impl<'a> AdxDecoder<'a> {
    /// Creates a decoder with the default configuration.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &DecodeConfig::default())
    }

    /// Creates a decoder honouring `config`. The `format` setting is ignored.
    pub fn with_config(input: &'a str, config: &DecodeConfig) -> Self {
        Self {
            input,
            normalize_newlines: config.normalize_newlines,
            builder: DocumentBuilder::new(),
            stack: Vec::new(),
            field: None,
        }
    }

    fn in_header(&self) -> bool {
        self.stack.iter().any(|name| name == HEADER)
    }

    fn open(&mut self, element: &BytesStart<'_>) -> quick_xml::Result<()> {
        let name = String::from_utf8_lossy(element.name().as_ref()).to_uppercase();
        tracing::trace!(depth = self.stack.len(), element = %name, "open");

        let field = if is_structural(&name) {
            None
        } else {
            let mut field = Field::new(&name);
            for attribute in element.attributes() {
                let attribute = attribute?;
                let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
                let value = attribute.unescape_value()?;
                field.set_attribute(&key, &value);
            }
            Some(field)
        };
        self.stack.push(name);

        self.field = match field {
            Some(field) if field.name() == APP => {
                self.builder.declare_appdef(&field);
                Some(field)
            }
            Some(mut field) if field.name() == USERDEF && !self.in_header() => {
                if field.type_indicator().is_none() {
                    let declared = field
                        .attribute(attr::FIELDNAME)
                        .and_then(|name| self.builder.userdef(name))
                        .and_then(|decl| decl.type_indicator())
                        .map(str::to_string);
                    if let Some(t) = declared {
                        field.set_attribute(attr::TYPE, &t);
                    }
                }
                Some(field)
            }
            other => other,
        };
        Ok(())
    }

    fn characters(&mut self, text: &str) {
        if self.stack.last().is_none_or(|name| is_structural(name)) {
            return;
        }
        let Some(field) = self.field.as_mut() else {
            return;
        };
        if self.normalize_newlines {
            field.append_data(&text.replace("\r\n", "\n"));
        } else {
            field.append_data(text);
        }
    }

    fn close(&mut self) {
        let Some(name) = self.stack.pop() else {
            return;
        };
        match name.as_str() {
            ADX | RECORDS => {}
            HEADER => self.builder.close_header(),
            RECORD => self.builder.close_record(),
            _ => {
                let Some(field) = self.field.take() else {
                    return;
                };
                if name == USERDEF && self.in_header() {
                    self.builder.declare_userdef(&field);
                } else if field.data().is_some() {
                    self.builder.set_field(field);
                } else {
                    // Same as a zero-length ADI tag.
                    tracing::trace!(element = %name, "skipping empty field");
                }
            }
        }
    }
}

impl Decoder for AdxDecoder<'_> {
    fn decode(mut self) -> Result<Document> {
        tracing::debug!(bytes = self.input.len(), "decoding ADX document");
        let mut reader = Reader::from_str(self.input);

        loop {
            let event = reader.read_event();
            let position = reader.buffer_position() as u64;
            let step = match event {
                Ok(Event::Start(element)) => self.open(&element),
                Ok(Event::Empty(element)) => self.open(&element).map(|()| self.close()),
                Ok(Event::End(_)) => {
                    self.close();
                    Ok(())
                }
                Ok(Event::Text(text)) => text.unescape().map(|text| self.characters(&text)),
                Ok(Event::CData(data)) => {
                    self.characters(&String::from_utf8_lossy(&data.into_inner()));
                    Ok(())
                }
                Ok(Event::Eof) => break,
                Ok(_) => Ok(()),
                Err(source) => Err(source),
            };
            step.map_err(|source| Error::Xml { position, source })?;
        }

        let document = self.builder.finish();
        tracing::debug!(records = document.records.len(), "decoded ADX document");
        Ok(document)
    }
}
