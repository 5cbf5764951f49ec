use serde_json::Value;

use crate::cache::DescriptorCache;
use crate::convert::{self, ConvertError};
use crate::ops::{ShapeMut, ShapeRef};
use crate::Mapped;

// -----------------------------------------------------------------------------
// ObjectMapper

/// The conversion facade: one entry point for both directions.
///
/// [`convert_value`](Self::convert_value) inspects the source and target
/// shapes and performs whichever of serialization, deserialization or
/// identity applies. The mapper owns the [`DescriptorCache`], so repeated
/// conversions of the same object shapes reuse their resolved field tables.
///
/// # Examples
///
/// ```
/// use objson::{derive::Mapped, ObjectMapper};
/// use serde_json::Value;
///
/// #[derive(Mapped, Default, PartialEq, Debug)]
/// struct Session {
///     #[mapped(required)]
///     id: u64,
///     #[mapped]
///     user: Option<String>,
/// }
///
/// let mapper = ObjectMapper::new();
/// let session = Session { id: 12, user: None };
///
/// // Typed value to JSON tree...
/// let value: Value = mapper.convert_value(&session).unwrap();
/// assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"id":12}"#);
///
/// // ...and back again through the same entry point.
/// let back: Session = mapper.convert_value(&value).unwrap();
/// assert_eq!(back, session);
/// ```
#[derive(Debug, Default)]
pub struct ObjectMapper {
    descriptors: DescriptorCache,
}

impl ObjectMapper {
    /// Creates a mapper with an empty descriptor cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            descriptors: DescriptorCache::new(),
        }
    }

    /// Converts `source` into a value of type `T`, in whichever direction
    /// the two shapes imply.
    ///
    /// - A raw-JSON source is deserialized into `T`.
    /// - A typed source with `T = `[`Value`] is serialized.
    /// - Raw JSON to [`Value`], or a typed source to its own type, is an
    ///   identity conversion.
    /// - A typed source with a different typed `T` goes through the JSON
    ///   tree (serialize, then deserialize).
    pub fn convert_value<T: Mapped + Default>(
        &self,
        source: &dyn Mapped,
    ) -> Result<T, ConvertError> {
        if let ShapeRef::Json(value) = source.shape_ref() {
            return self.from_value(value);
        }

        let value = self.to_value(source)?;

        let mut target = T::default();
        if let ShapeMut::Json(slot) = target.shape_mut() {
            // The target is the JSON value shape; no re-typing pass needed.
            *slot = value;
            return Ok(target);
        }

        convert::value_try_apply(&mut target, &value, &self.descriptors)?;
        Ok(target)
    }

    /// Serializes a mapped value into a JSON value tree.
    #[inline]
    pub fn to_value(&self, source: &dyn Mapped) -> Result<Value, ConvertError> {
        convert::to_value(source, &self.descriptors)
    }

    /// Deserializes a JSON value tree into a fresh `T`.
    ///
    /// The target starts from `T::default()`; optional fields missing from
    /// the input keep that state.
    pub fn from_value<T: Mapped + Default>(&self, value: &Value) -> Result<T, ConvertError> {
        let mut target = T::default();
        if let Err(err) = convert::value_try_apply(&mut target, value, &self.descriptors) {
            log::trace!("failed to apply JSON value to `{}`: {err}", target.type_name());
            return Err(err);
        }
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::convert::ConvertError;
    use crate::derive::Mapped;
    use crate::ObjectMapper;

    #[derive(Mapped, Default, PartialEq, Debug, Clone)]
    struct Message {
        #[mapped(rename = "testString")]
        test_string: String,
    }

    #[derive(Mapped, Default, PartialEq, Debug, Clone)]
    struct Counter {
        #[mapped]
        count: i32,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Envelope {
        #[mapped(required)]
        message: Message,
        #[mapped]
        counter: Option<Counter>,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    enum Level {
        #[default]
        #[mapped(value = "verbose")]
        Verbose,
        #[mapped(value = "info")]
        Info,
        #[mapped(value = "error")]
        Error,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct LogEntry {
        #[mapped]
        level: Level,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Tags {
        #[mapped]
        tags: Vec<String>,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Mixed {
        #[mapped]
        entries: Vec<Value>,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Matrix {
        #[mapped]
        rows: Vec<Vec<String>>,
    }

    fn roundtrip<T: crate::Mapped + Default + PartialEq + std::fmt::Debug>(
        mapper: &ObjectMapper,
        source: &T,
        expected_text: &str,
    ) {
        let value: Value = mapper.convert_value(source).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), expected_text);

        let parsed: Value = serde_json::from_str(expected_text).unwrap();
        let back: T = mapper.convert_value(&parsed).unwrap();
        assert_eq!(&back, source);
    }

    #[test]
    fn renamed_string_field() {
        let mapper = ObjectMapper::new();
        let message = Message {
            test_string: "test".to_owned(),
        };

        roundtrip(&mapper, &message, r#"{"testString":"test"}"#);
    }

    #[test]
    fn nested_objects_preserve_field_order() {
        let mapper = ObjectMapper::new();
        let envelope = Envelope {
            message: Message {
                test_string: "testString".to_owned(),
            },
            counter: Some(Counter { count: 4 }),
        };

        roundtrip(
            &mapper,
            &envelope,
            r#"{"message":{"testString":"testString"},"counter":{"count":4}}"#,
        );
    }

    #[test]
    fn absent_optional_field_is_omitted() {
        let mapper = ObjectMapper::new();
        let envelope = Envelope {
            message: Message {
                test_string: "only".to_owned(),
            },
            counter: None,
        };

        roundtrip(&mapper, &envelope, r#"{"message":{"testString":"only"}}"#);
    }

    #[test]
    fn missing_required_field_fails() {
        let mapper = ObjectMapper::new();
        let err = mapper
            .convert_value::<Envelope>(&json!({ "counter": { "count": 1 } }))
            .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::MissingField {
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn required_field_with_nested_null_compatible_value() {
        let mapper = ObjectMapper::new();

        // `counter` present but null is fine: the shape is optional.
        let envelope: Envelope = mapper
            .convert_value(&json!({
                "message": { "testString": "x" },
                "counter": null,
            }))
            .unwrap();
        assert_eq!(envelope.counter, None);

        // A required object field does not accept null.
        let err = mapper
            .convert_value::<Envelope>(&json!({ "message": null }))
            .unwrap_err();
        assert!(matches!(err, ConvertError::MismatchedTypes { .. }));
        assert_eq!(err.path().to_string(), "$.message");
    }

    #[test]
    fn enum_serializes_to_its_external_value() {
        let mapper = ObjectMapper::new();
        let entry = LogEntry { level: Level::Info };

        roundtrip(&mapper, &entry, r#"{"level":"info"}"#);

        // The Rust variant name is not an accepted identity.
        let err = mapper
            .convert_value::<LogEntry>(&json!({ "level": "Info" }))
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownVariant { value, .. } if value == "Info"
        ));
    }

    #[test]
    fn top_level_enum_conversion() {
        let mapper = ObjectMapper::new();

        let value: Value = mapper.convert_value(&Level::Error).unwrap();
        assert_eq!(value, json!("error"));

        let level: Level = mapper.convert_value(&value).unwrap();
        assert_eq!(level, Level::Error);
    }

    #[test]
    fn string_list_preserves_order() {
        let mapper = ObjectMapper::new();
        let tags = Tags {
            tags: vec!["one".to_owned(), "two".to_owned(), "three".to_owned()],
        };

        roundtrip(&mapper, &tags, r#"{"tags":["one","two","three"]}"#);
    }

    #[test]
    fn heterogeneous_list_mixes_shapes() {
        let mapper = ObjectMapper::new();
        let mixed = Mixed {
            entries: vec![json!("foo"), json!(["bar"])],
        };

        roundtrip(&mapper, &mixed, r#"{"entries":["foo",["bar"]]}"#);
    }

    #[test]
    fn list_of_lists_preserves_both_orders() {
        let mapper = ObjectMapper::new();
        let matrix = Matrix {
            rows: vec![
                vec!["foo".to_owned()],
                vec!["1".to_owned(), "2".to_owned()],
            ],
        };

        roundtrip(&mapper, &matrix, r#"{"rows":[["foo"],["1","2"]]}"#);
    }

    #[test]
    fn key_order_is_deterministic_across_calls() {
        let mapper = ObjectMapper::new();
        let envelope = Envelope {
            message: Message {
                test_string: "a".to_owned(),
            },
            counter: Some(Counter { count: 1 }),
        };

        let first = serde_json::to_string(&mapper.to_value(&envelope).unwrap()).unwrap();
        let second = serde_json::to_string(&mapper.to_value(&envelope).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn json_to_json_is_identity() {
        let mapper = ObjectMapper::new();
        let original = json!({ "a": [1, 2], "b": { "c": null } });

        let copied: Value = mapper.convert_value(&original).unwrap();
        assert_eq!(copied, original);
    }

    #[test]
    fn typed_to_same_type_is_identity() {
        let mapper = ObjectMapper::new();
        let message = Message {
            test_string: "same".to_owned(),
        };

        let copied: Message = mapper.convert_value(&message).unwrap();
        assert_eq!(copied, message);
    }

    #[test]
    fn unmapped_json_keys_are_ignored() {
        let mapper = ObjectMapper::new();
        let message: Message = mapper
            .convert_value(&json!({ "testString": "kept", "other": 1 }))
            .unwrap();

        assert_eq!(message.test_string, "kept");
    }
}
