//! Decoded field values and dynamic field declarations.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::grammar;

/// Element/field name used for application-defined fields.
pub const APP: &str = "APP";
/// Element/field name used for user-defined fields.
pub const USERDEF: &str = "USERDEF";
/// End-of-header delimiter.
pub const EOH: &str = "EOH";
/// End-of-record delimiter.
pub const EOR: &str = "EOR";

/// Attribute keys carried by application- and user-defined fields.
pub mod attr {
    /// Data type indicator.
    pub const TYPE: &str = "TYPE";
    /// Originating program of an application-defined field.
    pub const PROGRAMID: &str = "PROGRAMID";
    /// Name of an application- or user-defined field.
    pub const FIELDNAME: &str = "FIELDNAME";
    /// Numeric id of a user-defined field declaration.
    pub const FIELDID: &str = "FIELDID";
    /// Enumeration constraint of a user-defined field.
    pub const ENUM: &str = "ENUM";
    /// Range constraint of a user-defined field.
    pub const RANGE: &str = "RANGE";
}

/// One decoded value with optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    /// Payload, absent for tags that carry no data.
    pub data: Option<String>,
    attributes: HashMap<String, String>,
}

impl Field {
    /// Creates an empty field; the name is stored uppercased.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_uppercase(),
            data: None,
            attributes: HashMap::new(),
        }
    }

    /// Creates a field carrying `data`.
    pub fn with_data(name: &str, data: impl Into<String>) -> Self {
        let mut field = Self::new(name);
        field.data = Some(data.into());
        field
    }

    /// Canonical field name (`APP` and `USERDEF` for dynamic fields).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payload as a string slice.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Appends a fragment to the payload, creating it when absent.
    pub fn append_data(&mut self, fragment: &str) {
        match &mut self.data {
            Some(data) => data.push_str(fragment),
            None => self.data = Some(fragment.to_string()),
        }
    }

    /// All attributes, keyed by uppercase name.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Looks up an attribute; the key is matched case-insensitively.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(&key.to_uppercase()).map(String::as_str)
    }

    /// Stores an attribute. The key is uppercased, and so is the value when
    /// the key is `TYPE` or `ENUM`.
    pub fn set_attribute(&mut self, key: &str, value: &str) {
        let key = key.to_uppercase();
        let value = match key.as_str() {
            attr::TYPE | attr::ENUM => value.to_uppercase(),
            _ => value.to_string(),
        };
        self.attributes.insert(key, value);
    }

    /// Builder-style [`Field::set_attribute`].
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Data type indicator, if any.
    pub fn type_indicator(&self) -> Option<&str> {
        self.attribute(attr::TYPE)
    }

    /// Key under which this field is stored in a record or header.
    ///
    /// `APP` fields need both `PROGRAMID` and `FIELDNAME`; `USERDEF` fields
    /// need either `FIELDNAME` or data. Returns `None` otherwise.
    pub fn display_name(&self) -> Option<String> {
        match self.name.as_str() {
            APP => {
                let program = self.attribute(attr::PROGRAMID)?;
                let field = self.attribute(attr::FIELDNAME)?;
                Some(format!("{APP}_{program}_{field}").to_uppercase())
            }
            USERDEF => self
                .attribute(attr::FIELDNAME)
                .or(self.data())
                .map(str::to_uppercase),
            _ => Some(self.name.clone()),
        }
    }
}

/// Constraint attached to a user-defined field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// Brace-enclosed, comma-separated list, e.g. `{S,M,L}`.
    Enumeration(String),
    /// Brace-enclosed numeric bounds, e.g. `{5:20}`.
    Range(String),
}

impl Constraint {
    /// Raw constraint text as it appeared in the document.
    pub fn as_str(&self) -> &str {
        match self {
            Constraint::Enumeration(s) | Constraint::Range(s) => s,
        }
    }

    /// Items of an enumeration, without braces.
    pub fn enum_values(&self) -> Option<Vec<&str>> {
        let Constraint::Enumeration(text) = self else {
            return None;
        };
        let inner = text.strip_prefix('{')?.strip_suffix('}')?;
        Some(inner.split(',').collect())
    }

    /// Numeric bounds of a range.
    pub fn range_bounds(&self) -> Option<(f64, f64)> {
        match self {
            Constraint::Range(text) => grammar::range_bounds(text),
            Constraint::Enumeration(_) => None,
        }
    }
}

/// Declaration of a dynamically-typed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldDeclaration {
    /// `APP_<PROGRAMID>_<FIELDNAME>`.
    AppDefined {
        /// Originating program.
        program_id: String,
        /// Field name within the program's namespace.
        field_name: String,
        /// Declared data type indicator.
        type_indicator: Option<String>,
    },
    /// A `USERDEFn` header declaration.
    UserDefined {
        /// Numeric id from the `USERDEFn` tag or `FIELDID` attribute.
        field_id: Option<String>,
        /// Declared field name, case preserved.
        field_name: String,
        /// Declared data type indicator.
        type_indicator: Option<String>,
        /// Optional enumeration or range.
        constraint: Option<Constraint>,
    },
}

impl FieldDeclaration {
    /// Builds an application-defined declaration from an `APP` field.
    pub fn app_defined_from(field: &Field) -> Option<Self> {
        Some(FieldDeclaration::AppDefined {
            program_id: field.attribute(attr::PROGRAMID)?.to_string(),
            field_name: field.attribute(attr::FIELDNAME)?.to_string(),
            type_indicator: field.type_indicator().map(str::to_string),
        })
    }

    /// Builds a user-defined declaration from a header `USERDEF` field.
    ///
    /// The field name comes from the payload. `RANGE` wins over `ENUM` when
    /// both attributes are present.
    pub fn user_defined_from(field: &Field) -> Option<Self> {
        let constraint = field
            .attribute(attr::RANGE)
            .map(|r| Constraint::Range(r.to_string()))
            .or_else(|| {
                field
                    .attribute(attr::ENUM)
                    .map(|e| Constraint::Enumeration(e.to_string()))
            });
        Some(FieldDeclaration::UserDefined {
            field_id: field.attribute(attr::FIELDID).map(str::to_string),
            field_name: field.data()?.to_string(),
            type_indicator: field.type_indicator().map(str::to_string),
            constraint,
        })
    }

    /// Declared field name, case preserved.
    pub fn field_name(&self) -> &str {
        match self {
            FieldDeclaration::AppDefined { field_name, .. }
            | FieldDeclaration::UserDefined { field_name, .. } => field_name,
        }
    }

    /// Declared data type indicator.
    pub fn type_indicator(&self) -> Option<&str> {
        match self {
            FieldDeclaration::AppDefined { type_indicator, .. }
            | FieldDeclaration::UserDefined { type_indicator, .. } => type_indicator.as_deref(),
        }
    }

    /// Key under which matching values are stored in records.
    pub fn display_name(&self) -> String {
        match self {
            FieldDeclaration::AppDefined {
                program_id,
                field_name,
                ..
            } => format!("{APP}_{program_id}_{field_name}").to_uppercase(),
            FieldDeclaration::UserDefined { field_name, .. } => field_name.to_uppercase(),
        }
    }
}
