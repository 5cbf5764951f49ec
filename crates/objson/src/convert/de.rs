use serde_json::Value;

use crate::Mapped;
use crate::cache::DescriptorCache;
use crate::convert::{ConvertError, FieldPath};
use crate::ops::{MappedEnum, MappedList, MappedObject, MappedOption, MappedScalar, ShapeMut};

/// Recursively applies a JSON value to a mapped target, in place.
///
/// The target starts from its default state (a fresh `T::default()` in
/// [`ObjectMapper::from_value`]); fields whose serialized names are missing
/// from the input are left at that state unless marked required, and unknown
/// input keys are ignored. Any failure aborts the whole conversion.
///
/// [`ObjectMapper::from_value`]: crate::ObjectMapper::from_value
pub fn value_try_apply(
    target: &mut dyn Mapped,
    value: &Value,
    cache: &DescriptorCache,
) -> Result<(), ConvertError> {
    match target.shape_mut() {
        ShapeMut::Scalar(scalar) => scalar.scalar_try_apply(value),

        ShapeMut::Enum(target_enum) => {
            let Value::String(text) = value else {
                return Err(ConvertError::mismatched("String", value));
            };
            let info = target_enum.enum_info();
            let index =
                info.index_of_value(text)
                    .ok_or_else(|| ConvertError::UnknownVariant {
                        enum_name: info.type_name(),
                        value: text.clone(),
                        path: FieldPath::root(),
                    })?;
            target_enum.set_variant(index);
            Ok(())
        }

        ShapeMut::Object(object) => {
            let Value::Object(map) = value else {
                return Err(ConvertError::mismatched("Object", value));
            };
            let table = cache.describe(object.object_info());

            for descriptor in table.iter() {
                match map.get(descriptor.name()) {
                    Some(item) => {
                        let field = object
                            .field_at_mut(descriptor.index())
                            .expect("descriptor index within field table");
                        value_try_apply(field, item, cache)
                            .map_err(|err| err.at_field(descriptor.name()))?;
                    }
                    None if descriptor.is_required() => {
                        return Err(ConvertError::MissingField {
                            field: descriptor.name(),
                            path: FieldPath::root(),
                        });
                    }
                    // Optional and absent: the field keeps its default state.
                    None => {}
                }
            }
            Ok(())
        }

        ShapeMut::List(list) => {
            let Value::Array(items) = value else {
                return Err(ConvertError::mismatched("Array", value));
            };
            list.clear();
            for (index, item) in items.iter().enumerate() {
                let slot = list.push_default();
                value_try_apply(slot, item, cache).map_err(|err| err.at_index(index))?;
            }
            Ok(())
        }

        ShapeMut::Optional(optional) => {
            if value.is_null() {
                optional.clear();
                return Ok(());
            }
            value_try_apply(optional.get_or_insert_default(), value, cache)
        }

        ShapeMut::Json(slot) => {
            *slot = value.clone();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::cache::DescriptorCache;
    use crate::convert::{ConvertError, value_try_apply};
    use crate::derive::Mapped;

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Point {
        #[mapped(required)]
        x: i64,
        #[mapped(required)]
        y: i64,
    }

    #[derive(Mapped, Default, PartialEq, Debug)]
    struct Polygon {
        #[mapped]
        points: Vec<Point>,
        #[mapped]
        name: Option<String>,
    }

    fn apply<T: crate::Mapped + Default>(value: &Value) -> Result<T, ConvertError> {
        let cache = DescriptorCache::new();
        let mut target = T::default();
        value_try_apply(&mut target, value, &cache)?;
        Ok(target)
    }

    #[test]
    fn missing_required_field_fails() {
        let err = apply::<Point>(&json!({ "x": 1 })).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingField { field: "y", .. }
        ));
    }

    #[test]
    fn missing_optional_field_keeps_default() {
        let polygon = apply::<Polygon>(&json!({ "points": [] })).unwrap();
        assert_eq!(polygon, Polygon::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let point = apply::<Point>(&json!({ "x": 1, "y": 2, "z": 3 })).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn null_clears_an_optional_target() {
        let polygon = apply::<Polygon>(&json!({
            "points": [],
            "name": null,
        }))
        .unwrap();
        assert_eq!(polygon.name, None);
    }

    #[test]
    fn tag_mismatch_reports_the_failure_path() {
        let err = apply::<Polygon>(&json!({
            "points": [{ "x": 1, "y": 2 }, { "x": 1, "y": [] }],
        }))
        .unwrap_err();

        assert!(matches!(
            &err,
            ConvertError::MismatchedTypes { expected: "i64", .. }
        ));
        assert_eq!(err.path().to_string(), "$.points[1].y");
    }

    #[test]
    fn array_expected_for_list_target() {
        let err = apply::<Polygon>(&json!({ "points": {} })).unwrap_err();
        assert!(matches!(
            &err,
            ConvertError::MismatchedTypes { expected: "Array", .. }
        ));
    }

    #[test]
    fn replaces_existing_list_contents() {
        let cache = DescriptorCache::new();
        let mut polygon = Polygon {
            points: vec![Point { x: 9, y: 9 }, Point { x: 8, y: 8 }],
            name: Some("old".to_owned()),
        };

        value_try_apply(
            &mut polygon,
            &json!({ "points": [{ "x": 1, "y": 2 }], "name": "new" }),
            &cache,
        )
        .unwrap();

        assert_eq!(polygon.points, vec![Point { x: 1, y: 2 }]);
        assert_eq!(polygon.name.as_deref(), Some("new"));
    }
}
