use pretty_assertions::assert_eq;
use propkit_model::{
    Accessor, Error, ErrorKind, FieldOwner, ParamInfo, Registry, ValidatedField, Validator,
    ValueKind, Variant,
};

/// A minimal owner used to exercise the registry outside `SampleObject`.
struct Settings {
    registry: Registry<Self>,
    width: ValidatedField<i64>,
    title: ValidatedField<String>,
}

impl Settings {
    fn new() -> propkit_model::Result<Self> {
        let mut registry = Registry::new();
        let width = ValidatedField::in_range("width", 80, 1, 500)?.register(
            &mut registry,
            Accessor::<Self>::new(|o| &o.width, |o| &mut o.width),
        )?;
        let title = ValidatedField::new("title", "untitled".to_string(), Validator::max_chars(8))?
            .register(
                &mut registry,
                Accessor::<Self>::new(|o| &o.title, |o| &mut o.title),
            )?;
        Ok(Self {
            registry,
            width,
            title,
        })
    }
}

impl FieldOwner for Settings {
    fn registry(&self) -> &Registry<Self> {
        &self.registry
    }
}

// ── Registration ─────────────────────────────────────────────────

#[test]
fn fields_are_listed_in_registration_order() {
    let s = Settings::new().unwrap();
    let names: Vec<&str> = s.list_fields().collect();
    assert_eq!(names, vec!["width", "title"]);
}

#[test]
fn duplicate_name_is_rejected_and_first_entry_kept() {
    let mut registry: Registry<Settings> = Registry::new();
    let first = ValidatedField::in_range("width", 80_i64, 1, 500).unwrap();
    first
        .register(
            &mut registry,
            Accessor::<Settings>::new(|o| &o.width, |o| &mut o.width),
        )
        .unwrap();

    let second = ValidatedField::new("width", "dup".to_string(), Validator::max_chars(8)).unwrap();
    let err = second
        .register(
            &mut registry,
            Accessor::<Settings>::new(|o| &o.title, |o| &mut o.title),
        )
        .unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateName {
            name: "width".into()
        }
    );
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.kind_of("width"), Some(ValueKind::Int));
}

#[test]
fn empty_registry() {
    let registry: Registry<Settings> = Registry::default();
    assert!(registry.is_empty());
    assert!(!registry.contains("width"));
    assert_eq!(registry.names().count(), 0);
}

#[test]
fn registry_debug_lists_names_and_kinds() {
    let s = Settings::new().unwrap();
    let dbg = format!("{:?}", s.registry());
    assert!(dbg.contains("\"width\": Int"));
    assert!(dbg.contains("\"title\": Text"));
}

// ── Generic get/set ──────────────────────────────────────────────

#[test]
fn get_param_exports_current_value() {
    let s = Settings::new().unwrap();
    assert_eq!(s.get_param("width").unwrap(), Variant::Int(80));
    assert_eq!(s.get_param("title").unwrap(), Variant::from("untitled"));
}

#[test]
fn set_param_writes_through_to_typed_field() {
    let mut s = Settings::new().unwrap();
    s.set_param("width", Variant::Int(120)).unwrap();
    assert_eq!(s.width.get(), 120);
    s.set_param("title", Variant::from("notes")).unwrap();
    assert_eq!(s.title.get(), "notes");
}

#[test]
fn unknown_name_is_not_found() {
    let mut s = Settings::new().unwrap();
    assert_eq!(
        s.get_param("height").unwrap_err().kind(),
        ErrorKind::NameNotFound
    );
    assert_eq!(
        s.set_param("height", Variant::Int(1)).unwrap_err(),
        Error::NameNotFound {
            name: "height".into()
        }
    );
    assert_eq!(s.registry().len(), 2);
}

#[test]
fn set_param_propagates_field_errors_unchanged() {
    let mut s = Settings::new().unwrap();
    let err = s.set_param("width", Variant::Float(10.0)).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: ValueKind::Int,
            found: ValueKind::Float,
        }
    );
    let err = s.set_param("title", Variant::from("far too long")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert_eq!(s.width.get(), 80);
    assert_eq!(s.title.get(), "untitled");
}

/// An owner whose `bounded` entry is wired to the wrong field.
struct Miswired {
    registry: Registry<Self>,
    bounded: ValidatedField<i64>,
    open: ValidatedField<i64>,
}

impl Miswired {
    fn new() -> Self {
        let mut registry = Registry::new();
        let bounded = ValidatedField::in_range("bounded", 0, -10, 10)
            .unwrap()
            .register(
                &mut registry,
                Accessor::<Self>::new(|o| &o.open, |o| &mut o.open),
            )
            .unwrap();
        let open = ValidatedField::new("open", 0, Validator::new("any integer", |_: &i64| true))
            .unwrap();
        Self {
            registry,
            bounded,
            open,
        }
    }
}

impl FieldOwner for Miswired {
    fn registry(&self) -> &Registry<Self> {
        &self.registry
    }
}

#[test]
fn accessor_to_another_field_rejects_write() {
    let mut m = Miswired::new();
    let err = m.set_param("bounded", Variant::Int(500)).unwrap_err();
    assert_eq!(
        err,
        Error::NameNotFound {
            name: "bounded".into()
        }
    );
    assert_eq!(m.bounded.get(), 0);
    assert_eq!(m.open.get(), 0);
}

#[test]
fn accessor_to_another_field_rejects_read() {
    let m = Miswired::new();
    assert_eq!(
        m.get_param("bounded").unwrap_err().kind(),
        ErrorKind::NameNotFound
    );
    assert!(m.describe("bounded").is_err());
}

// ── Introspection ────────────────────────────────────────────────

#[test]
fn describe_reports_kind_and_rule() {
    let s = Settings::new().unwrap();
    assert_eq!(
        s.describe("title").unwrap(),
        ParamInfo {
            name: "title".into(),
            kind: ValueKind::Text,
            rule: "at most 8 characters".into(),
        }
    );
    assert!(s.describe("missing").is_err());
}

#[test]
fn snapshot_is_ordered_and_reflects_writes() {
    let mut s = Settings::new().unwrap();
    s.set_param("width", Variant::Int(5)).unwrap();
    let snap = s.snapshot();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap[0].name, "width");
    assert_eq!(snap[0].value, Variant::Int(5));
    assert_eq!(snap[1].kind, ValueKind::Text);
}

#[test]
fn field_lookup_returns_handle() {
    let s = Settings::new().unwrap();
    let f = s.field("width").unwrap();
    assert_eq!(f.name(), "width");
    assert_eq!(f.kind(), ValueKind::Int);
}
