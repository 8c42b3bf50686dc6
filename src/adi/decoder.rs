//! State machine turning ADI events into a [`Document`].

use crate::{
    builder::DocumentBuilder,
    decoder::Decoder,
    document::{DecodeConfig, Document},
    error::Result,
    field::{APP, EOH, EOR, Field, USERDEF, attr},
    grammar,
    types::LineNumber,
};

use super::{
    events::AdiEvent,
    parser::{EventSink, Parser},
};

/// Field currently being assembled between `StartField` and `EndField`.
#[derive(Debug)]
enum Slot {
    /// `USERDEFn` header declaration.
    Declaration(Field),
    /// Any value stored into the open record.
    Value(Field),
}

/// Decoder for the tagged ADI format.
///
/// `APP_` fields get a `TYPE` attribute only when their tag carries one; no
/// `M` default is filled in.
#[derive(Debug)]
pub struct AdiDecoder<'a> {
    input: &'a str,
    normalize_newlines: bool,
    builder: DocumentBuilder,
    slot: Option<Slot>,
}

impl<'a> AdiDecoder<'a> {
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
            slot: None,
        }
    }

    fn start_field(&mut self, name: &str, data_type: Option<char>) {
        let type_indicator = data_type.map(String::from);

        let slot = if let Some(id) = grammar::userdef_id(name) {
            let mut field = Field::new(USERDEF).attr(attr::FIELDID, id);
            if let Some(t) = &type_indicator {
                field.set_attribute(attr::TYPE, t);
            }
            Slot::Declaration(field)
        } else if let Some((program_id, field_name)) = grammar::split_app_name(name) {
            let mut field = Field::new(APP)
                .attr(attr::PROGRAMID, program_id)
                .attr(attr::FIELDNAME, field_name);
            if let Some(t) = &type_indicator {
                field.set_attribute(attr::TYPE, t);
            }
            self.builder.declare_appdef(&field);
            Slot::Value(field)
        } else if let Some(decl) = self.builder.userdef(name) {
            let mut field = Field::new(USERDEF).attr(attr::FIELDNAME, name);
            if let Some(t) = type_indicator.as_deref().or(decl.type_indicator()) {
                field.set_attribute(attr::TYPE, t);
            }
            Slot::Value(field)
        } else {
            let mut field = Field::new(name);
            if let Some(t) = &type_indicator {
                field.set_attribute(attr::TYPE, t);
            }
            Slot::Value(field)
        };
        self.slot = Some(slot);
    }

    fn found_data(&mut self, data: &str) {
        let data = if self.normalize_newlines {
            data.replace("\r\n", "\n")
        } else {
            data.to_string()
        };

        match &mut self.slot {
            Some(Slot::Declaration(field)) => match data.split_once(',') {
                Some((name, bounds)) if grammar::is_range(bounds) => {
                    field.set_attribute(attr::RANGE, bounds);
                    field.data = Some(name.to_string());
                }
                Some((name, values)) if grammar::is_enumeration(values) => {
                    field.set_attribute(attr::ENUM, values);
                    field.data = Some(name.to_string());
                }
                _ => field.data = Some(data),
            },
            Some(Slot::Value(field)) => {
                field.data = Some(data);
                self.builder.set_field(field.clone());
            }
            None => {}
        }
    }

    fn end_field(&mut self) {
        match self.slot.take() {
            Some(Slot::Declaration(field)) => self.builder.declare_userdef(&field),
            Some(Slot::Value(field)) => match field.name() {
                EOH => self.builder.close_header(),
                EOR => {
                    tracing::trace!(id = self.builder.next_record_id(), "record closed");
                    self.builder.close_record();
                }
                _ => {}
            },
            None => {}
        }
    }
}

impl EventSink for AdiDecoder<'_> {
    fn on_event(&mut self, event: AdiEvent<'_>, line: LineNumber) {
        match event {
            AdiEvent::Comment(_) => {}
            AdiEvent::StartField {
                name, data_type, ..
            } => {
                tracing::trace!(line, name = %name, "data-specifier");
                self.start_field(&name, data_type);
            }
            AdiEvent::Data(data) => self.found_data(&data),
            AdiEvent::EndField { .. } => self.end_field(),
            AdiEvent::EndDocument => {}
        }
    }
}

impl Decoder for AdiDecoder<'_> {
    fn decode(mut self) -> Result<Document> {
        let input = self.input;
        tracing::debug!(bytes = input.len(), "decoding ADI document");
        let lines = Parser::new(input).with_sink(&mut self).parse()?;
        let document = self.builder.finish();
        tracing::debug!(lines, records = document.records.len(), "decoded ADI document");
        Ok(document)
    }
}
