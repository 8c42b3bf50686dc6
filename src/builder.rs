//! Record/header bookkeeping shared by the ADI and ADX decoders.

use crate::{
    document::Document,
    field::{Field, FieldDeclaration},
    record::{Header, Record},
    types::RecordId,
};

#[derive(Debug, Default)]
pub(crate) struct DocumentBuilder {
    header: Header,
    records: Vec<Record>,
    record: Record,
}

impl DocumentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores `field` in the open record under its display name. Later
    /// writes to the same name win.
    pub(crate) fn set_field(&mut self, field: Field) {
        match field.display_name() {
            Some(key) => {
                self.record.set(&key, field);
            }
            None => tracing::warn!(name = field.name(), "skipping field without a display name"),
        }
    }

    pub(crate) fn declare_userdef(&mut self, field: &Field) {
        match FieldDeclaration::user_defined_from(field) {
            Some(decl) => {
                tracing::trace!(name = decl.field_name(), "user-defined field declared");
                self.header.userdefs.insert(decl.display_name(), decl);
            }
            None => tracing::warn!("skipping user-defined declaration without a field name"),
        }
    }

    /// Registers an application-defined field the first time its display
    /// name is seen.
    pub(crate) fn declare_appdef(&mut self, field: &Field) {
        let Some(decl) = FieldDeclaration::app_defined_from(field) else {
            tracing::warn!("skipping application-defined field without PROGRAMID/FIELDNAME");
            return;
        };
        self.header
            .appdefs
            .entry(decl.display_name())
            .or_insert(decl);
    }

    pub(crate) fn userdef(&self, display_name: &str) -> Option<&FieldDeclaration> {
        self.header.userdef(display_name)
    }

    /// Moves the open record's fields into the header. The record id is not
    /// consumed.
    pub(crate) fn close_header(&mut self) {
        self.header.fields = std::mem::take(&mut self.record.fields);
        self.record = Record::new(self.record.id);
    }

    pub(crate) fn close_record(&mut self) {
        let next = self.record.next();
        self.records.push(std::mem::replace(&mut self.record, next));
    }

    pub(crate) fn next_record_id(&self) -> RecordId {
        self.record.id
    }

    pub(crate) fn finish(self) -> Document {
        if !self.record.is_empty() {
            tracing::debug!(
                id = self.record.id,
                fields = self.record.len(),
                "dropping unterminated record"
            );
        }
        Document {
            header: self.header,
            records: self.records,
        }
    }
}
