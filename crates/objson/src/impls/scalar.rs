//! Scalar implementations: booleans, integers, floats and strings.

use serde_json::Value;

use crate::convert::{ConvertError, FieldPath};
use crate::ops::{MappedScalar, ShapeMut, ShapeRef};
use crate::Mapped;

macro_rules! impl_mapped_scalar {
    ($ty:ty) => {
        impl Mapped for $ty {
            #[inline]
            fn shape_ref(&self) -> ShapeRef<'_> {
                ShapeRef::Scalar(self)
            }

            #[inline]
            fn shape_mut(&mut self) -> ShapeMut<'_> {
                ShapeMut::Scalar(self)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// bool

impl_mapped_scalar!(bool);

impl MappedScalar for bool {
    #[inline]
    fn scalar_to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::Bool(*self))
    }

    fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        match value.as_bool() {
            Some(v) => {
                *self = v;
                Ok(())
            }
            None => Err(ConvertError::mismatched("bool", value)),
        }
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_mapped_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl_mapped_scalar!($ty);

        impl MappedScalar for $ty {
            #[inline]
            fn scalar_to_value(&self) -> Result<Value, ConvertError> {
                Ok(Value::from(*self))
            }

            fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
                match value.as_i64().and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => {
                        *self = v;
                        Ok(())
                    }
                    None => Err(ConvertError::mismatched(stringify!($ty), value)),
                }
            }
        }
    )*};
}

macro_rules! impl_mapped_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl_mapped_scalar!($ty);

        impl MappedScalar for $ty {
            #[inline]
            fn scalar_to_value(&self) -> Result<Value, ConvertError> {
                Ok(Value::from(*self))
            }

            fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
                match value.as_u64().and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => {
                        *self = v;
                        Ok(())
                    }
                    None => Err(ConvertError::mismatched(stringify!($ty), value)),
                }
            }
        }
    )*};
}

impl_mapped_signed!(i8, i16, i32, i64, isize);
impl_mapped_unsigned!(u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

impl_mapped_scalar!(f32);
impl_mapped_scalar!(f64);

fn non_finite(type_name: &'static str) -> ConvertError {
    ConvertError::Unsupported {
        type_name,
        reason: "non-finite number",
        path: FieldPath::root(),
    }
}

impl MappedScalar for f32 {
    fn scalar_to_value(&self) -> Result<Value, ConvertError> {
        if !self.is_finite() {
            return Err(non_finite("f32"));
        }
        Ok(Value::from(*self))
    }

    fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        // Accepts any JSON number, including integers.
        match value.as_f64() {
            Some(v) => {
                *self = v as f32;
                Ok(())
            }
            None => Err(ConvertError::mismatched("f32", value)),
        }
    }
}

impl MappedScalar for f64 {
    fn scalar_to_value(&self) -> Result<Value, ConvertError> {
        if !self.is_finite() {
            return Err(non_finite("f64"));
        }
        Ok(Value::from(*self))
    }

    fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        // Accepts any JSON number, including integers.
        match value.as_f64() {
            Some(v) => {
                *self = v;
                Ok(())
            }
            None => Err(ConvertError::mismatched("f64", value)),
        }
    }
}

// -----------------------------------------------------------------------------
// String

impl_mapped_scalar!(String);

impl MappedScalar for String {
    #[inline]
    fn scalar_to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(self.clone()))
    }

    fn scalar_try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        match value {
            Value::String(v) => {
                *self = v.clone();
                Ok(())
            }
            _ => Err(ConvertError::mismatched("String", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::convert::ConvertError;
    use crate::ops::MappedScalar;

    #[test]
    fn integer_range_is_enforced() {
        let mut small = 0_i8;
        assert!(small.scalar_try_apply(&json!(100)).is_ok());
        assert_eq!(small, 100);

        let err = small.scalar_try_apply(&json!(100_000)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MismatchedTypes { expected: "i8", .. }
        ));
    }

    #[test]
    fn unsigned_rejects_negative_numbers() {
        let mut count = 0_u32;
        assert!(count.scalar_try_apply(&json!(-1)).is_err());
        assert!(count.scalar_try_apply(&json!(1)).is_ok());
    }

    #[test]
    fn float_accepts_integer_numbers() {
        let mut ratio = 0.0_f64;
        ratio.scalar_try_apply(&json!(4)).unwrap();
        assert_eq!(ratio, 4.0);
    }

    #[test]
    fn tags_are_checked() {
        let mut flag = false;
        assert!(flag.scalar_try_apply(&json!("true")).is_err());

        let mut text = String::new();
        assert!(text.scalar_try_apply(&json!(true)).is_err());
        text.scalar_try_apply(&json!("ok")).unwrap();
        assert_eq!(text, "ok");
    }
}
