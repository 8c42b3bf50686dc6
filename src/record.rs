//! QSO records and the document header.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    field::{Field, FieldDeclaration},
    types::RecordId,
};

/// One QSO entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Decode-order position; only used for stable re-sorting.
    #[serde(skip)]
    pub id: RecordId,
    /// Fields keyed by display name.
    pub fields: HashMap<String, Field>,
}

impl Record {
    /// Creates an empty record.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    /// Opens the record that follows this one.
    pub fn next(&self) -> Self {
        Self::new(self.id + 1)
    }

    /// Looks up a field by display name, case-insensitively.
    pub fn get(&self, display_name: &str) -> Option<&Field> {
        self.fields.get(&display_name.to_uppercase())
    }

    /// Stores `field` under `display_name`, returning any value it replaced.
    pub fn set(&mut self, display_name: &str, field: Field) -> Option<Field> {
        self.fields.insert(display_name.to_uppercase(), field)
    }

    /// Removes a field by display name.
    pub fn remove(&mut self, display_name: &str) -> Option<Field> {
        self.fields.remove(&display_name.to_uppercase())
    }

    /// Convenience accessor for a field's payload.
    pub fn data(&self, display_name: &str) -> Option<&str> {
        self.get(display_name).and_then(Field::data)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Document-level metadata and dynamic field declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Header-scope fields such as `ADIF_VER` and `PROGRAMID`.
    pub fields: HashMap<String, Field>,
    /// User-defined field declarations keyed by display name.
    pub userdefs: HashMap<String, FieldDeclaration>,
    /// First declaration of every application-defined field, keyed by
    /// display name.
    pub appdefs: HashMap<String, FieldDeclaration>,
}

impl Header {
    /// Looks up a header field, case-insensitively.
    pub fn get(&self, display_name: &str) -> Option<&Field> {
        self.fields.get(&display_name.to_uppercase())
    }

    /// Stores a header field, returning any value it replaced.
    pub fn set(&mut self, display_name: &str, field: Field) -> Option<Field> {
        self.fields.insert(display_name.to_uppercase(), field)
    }

    /// Convenience accessor for a header field's payload.
    pub fn data(&self, display_name: &str) -> Option<&str> {
        self.get(display_name).and_then(Field::data)
    }

    /// Looks up a user-defined declaration by display name.
    pub fn userdef(&self, display_name: &str) -> Option<&FieldDeclaration> {
        self.userdefs.get(&display_name.to_uppercase())
    }

    /// True when nothing was decoded into the header.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.userdefs.is_empty() && self.appdefs.is_empty()
    }
}
