use adif::{
    adi::{AdiEvent, EventSink, Parser, Tokenizer},
    document::DecodeConfig,
    field::{Constraint, Field, FieldDeclaration, attr},
    grammar,
    record::{Header, Record},
    types::Format,
};

#[test]
fn field_names_and_attributes_are_case_insensitive() {
    let field = Field::with_data("call", "W1AW").attr("type", "s");
    assert_eq!(field.name(), "CALL");
    assert_eq!(field.attribute("Type"), Some("S"));
    assert_eq!(field.attributes().get(attr::TYPE).map(String::as_str), Some("S"));
    assert_eq!(field.display_name().as_deref(), Some("CALL"));
}

#[test]
fn dynamic_field_display_names() {
    let app = Field::new("app").attr("programid", "n1mm").attr("fieldname", "exch");
    assert_eq!(app.display_name().as_deref(), Some("APP_N1MM_EXCH"));
    assert_eq!(Field::new("APP").attr(attr::PROGRAMID, "N1MM").display_name(), None);

    assert_eq!(
        Field::with_data("USERDEF", "ShoeSize").display_name().as_deref(),
        Some("SHOESIZE")
    );
    assert_eq!(Field::new("USERDEF").display_name(), None);
}

#[test]
fn declarations_prefer_range_over_enumeration() {
    let field = Field::with_data("USERDEF", "Size")
        .attr(attr::FIELDID, "4")
        .attr(attr::ENUM, "{a,b}")
        .attr(attr::RANGE, "{1:2}");
    let decl = FieldDeclaration::user_defined_from(&field).expect("decl");
    let FieldDeclaration::UserDefined { constraint, field_id, .. } = &decl else {
        panic!("expected user-defined declaration");
    };
    assert_eq!(field_id.as_deref(), Some("4"));
    assert_eq!(constraint.as_ref().map(Constraint::as_str), Some("{1:2}"));
    assert_eq!(decl.display_name(), "SIZE");

    assert!(FieldDeclaration::user_defined_from(&Field::new("USERDEF")).is_none());
    assert!(FieldDeclaration::app_defined_from(&Field::new("APP")).is_none());
}

#[test]
fn records_and_header_normalize_keys() {
    let mut record = Record::new(7);
    assert!(record.set("band", Field::with_data("BAND", "20M")).is_none());
    assert!(record.set("BAND", Field::with_data("BAND", "40M")).is_some());
    assert_eq!(record.data("Band"), Some("40M"));
    assert_eq!(record.next().id, 8);
    assert!(record.remove("band").is_some());
    assert!(record.is_empty());

    let mut header = Header::default();
    assert!(header.is_empty());
    header.set("adif_ver", Field::with_data("ADIF_VER", "3.1.4"));
    assert_eq!(header.data("ADIF_VER"), Some("3.1.4"));
    assert!(!header.is_empty());
}

#[test]
fn grammar_accepts_adif_field_names() {
    assert!(grammar::is_field_name("MY FIELD"));
    assert!(grammar::is_field_name("QSO_DATE"));
    assert!(!grammar::is_field_name(" CALL"));
    assert!(!grammar::is_field_name("CALL "));
    assert!(!grammar::is_field_name("A,B"));
    assert!(!grammar::is_field_name("{X}"));

    assert_eq!(grammar::split_app_name("app_Log4OM_qso_id"), Some(("Log4OM_qso", "id")));
    assert_eq!(grammar::split_app_name("APP_ONLY"), None);
    assert_eq!(grammar::userdef_id("userdef12"), Some("12"));
    assert_eq!(grammar::userdef_id("USERDEF"), None);

    assert_eq!(grammar::range_bounds("{-1.5:20}"), Some((-1.5, 20.0)));
    assert!(!grammar::is_range("{a:b}"));
    assert!(grammar::is_enumeration("{S,M,L}"));
    assert!(!grammar::is_enumeration("S,M,L"));
}

#[test]
fn formats_from_extensions() {
    assert_eq!(Format::from_extension("ADI"), Some(Format::Adi));
    assert_eq!(Format::from_extension("adx"), Some(Format::Adx));
    assert_eq!(Format::from_extension("csv"), None);
    assert_eq!(Format::detect("<?xml version=\"1.0\"?><ADX/>"), Format::Adx);
    assert_eq!(Format::detect("<EOH>"), Format::Adi);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: DecodeConfig = serde_json::from_str(r#"{"format":"adx"}"#).expect("config");
    assert_eq!(config.format, Some(Format::Adx));
    assert!(config.normalize_newlines);

    let config: DecodeConfig = serde_json::from_str("{}").expect("config");
    assert_eq!(config, DecodeConfig::default());
}

#[test]
fn tokenizer_position_tracks_bytes() {
    let mut tokenizer = Tokenizer::new("<A:2>ok<EOR>");
    assert_eq!(tokenizer.position(), 0);
    tokenizer.next();
    assert_eq!(tokenizer.position(), 5);
    tokenizer.next();
    assert_eq!(tokenizer.position(), 7);
}

#[derive(Default)]
struct Counter {
    fields: usize,
}

impl EventSink for Counter {
    fn on_event(&mut self, event: AdiEvent<'_>, _line: usize) {
        if matches!(event, AdiEvent::EndField { .. }) {
            self.fields += 1;
        }
    }
}

#[test]
fn sink_can_be_attached_after_construction() {
    let mut counter = Counter::default();
    let mut parser = Parser::new("<CALL:4>W1AW<BAND:3>20M<EOR>");
    parser.set_sink(&mut counter);
    assert_eq!(parser.parse().expect("parse"), 1);
    assert_eq!(counter.fields, 3);
}
