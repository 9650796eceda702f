use crate::field::ValidatedField;
use crate::registry::{Accessor, FieldOwner, Registry};
use crate::validator::Validator;
use propkit_types::Result;

/// An object with three self-registered parameters: a bounded integer,
/// a bounded float and a length-limited string.
#[derive(Debug)]
pub struct SampleObject {
    registry: Registry<Self>,
    my_int: ValidatedField<i64>,
    my_double: ValidatedField<f64>,
    my_string: ValidatedField<String>,
}

impl SampleObject {
    pub const MY_INT: &'static str = "myInt";
    pub const MY_DOUBLE: &'static str = "myDouble";
    pub const MY_STRING: &'static str = "myString";

    pub const INT_MIN: i64 = -10;
    pub const INT_MAX: i64 = 10;
    pub const FLOAT_MIN: f64 = -10.0;
    pub const FLOAT_MAX: f64 = 10.0;
    pub const TEXT_MAX_CHARS: usize = 20;

    /// Builds the object, registering each field in declaration order.
    pub fn new() -> Result<Self> {
        let mut registry = Registry::new();

        let my_int = ValidatedField::in_range(Self::MY_INT, 0, Self::INT_MIN, Self::INT_MAX)?
            .register(
                &mut registry,
                Accessor::<Self>::new(|o| &o.my_int, |o| &mut o.my_int),
            )?;
        let my_double =
            ValidatedField::in_range(Self::MY_DOUBLE, 0.0, Self::FLOAT_MIN, Self::FLOAT_MAX)?
                .register(
                    &mut registry,
                    Accessor::<Self>::new(|o| &o.my_double, |o| &mut o.my_double),
                )?;
        let my_string = ValidatedField::new(
            Self::MY_STRING,
            "string".to_string(),
            Validator::max_chars(Self::TEXT_MAX_CHARS),
        )?
        .register(
            &mut registry,
            Accessor::<Self>::new(|o| &o.my_string, |o| &mut o.my_string),
        )?;

        Ok(Self {
            registry,
            my_int,
            my_double,
            my_string,
        })
    }

    pub fn my_int(&self) -> &ValidatedField<i64> {
        &self.my_int
    }

    pub fn my_double(&self) -> &ValidatedField<f64> {
        &self.my_double
    }

    pub fn my_string(&self) -> &ValidatedField<String> {
        &self.my_string
    }

    /// Sets the integer and float to zero and the string to `"zero"`.
    ///
    /// Each write goes through the field's own validation.
    pub fn reset_to_zero(&mut self) -> Result<()> {
        self.my_int.set(0)?;
        self.my_double.set(0.0)?;
        self.my_string.set("zero".to_string())?;
        Ok(())
    }
}

impl FieldOwner for SampleObject {
    fn registry(&self) -> &Registry<Self> {
        &self.registry
    }
}
