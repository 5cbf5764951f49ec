use serde_json::{Map, Value};

use crate::Mapped;
use crate::cache::DescriptorCache;
use crate::convert::ConvertError;
use crate::ops::{MappedEnum, MappedList, MappedObject, MappedOption, MappedScalar, ShapeRef};

/// Recursively converts a mapped value into a JSON value.
///
/// Object keys are produced in field descriptor order (declaration order) and
/// list elements in sequence order; the conversion introduces no reordering.
/// An object field of optional shape that is currently absent is omitted from
/// the output; an explicit [`Value::Null`] stored in a `Json`-shaped field is
/// emitted as `null`.
pub fn to_value(source: &dyn Mapped, cache: &DescriptorCache) -> Result<Value, ConvertError> {
    match source.shape_ref() {
        ShapeRef::Scalar(scalar) => scalar.scalar_to_value(),

        ShapeRef::Enum(value) => {
            let info = value.enum_info();
            let variant = info
                .variant_at(value.variant_index())
                .expect("variant index within variant table");
            Ok(Value::String(variant.value().to_owned()))
        }

        ShapeRef::Object(object) => {
            let table = cache.describe(object.object_info());
            let mut map = Map::with_capacity(table.len());

            for descriptor in table.iter() {
                let field = object
                    .field_at(descriptor.index())
                    .expect("descriptor index within field table");

                // Absent optional fields are left out of the output entirely.
                if let ShapeRef::Optional(optional) = field.shape_ref() {
                    if let Some(inner) = optional.get() {
                        let value = to_value(inner, cache)
                            .map_err(|err| err.at_field(descriptor.name()))?;
                        map.insert(descriptor.name().to_owned(), value);
                    }
                    continue;
                }

                let value =
                    to_value(field, cache).map_err(|err| err.at_field(descriptor.name()))?;
                map.insert(descriptor.name().to_owned(), value);
            }

            Ok(Value::Object(map))
        }

        ShapeRef::List(list) => {
            let mut items = Vec::with_capacity(list.len());
            for (index, item) in list.iter().enumerate() {
                items.push(to_value(item, cache).map_err(|err| err.at_index(index))?);
            }
            Ok(Value::Array(items))
        }

        // Outside object-field position an absent optional is `null`.
        ShapeRef::Optional(optional) => match optional.get() {
            Some(inner) => to_value(inner, cache),
            None => Ok(Value::Null),
        },

        ShapeRef::Json(value) => Ok(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::cache::DescriptorCache;
    use crate::convert::{ConvertError, to_value};
    use crate::derive::Mapped;

    #[derive(Mapped, Default)]
    struct Reading {
        #[mapped]
        ratio: f64,
    }

    #[derive(Mapped, Default)]
    struct Annotated {
        #[mapped]
        label: String,
        #[mapped]
        extra: Value,
    }

    #[test]
    fn non_finite_float_is_rejected() {
        let cache = DescriptorCache::new();
        let reading = Reading {
            ratio: f64::INFINITY,
        };

        let err = to_value(&reading, &cache).unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));
        assert_eq!(err.path().to_string(), "$.ratio");
    }

    #[test]
    fn explicit_null_is_emitted() {
        let cache = DescriptorCache::new();
        let annotated = Annotated {
            label: "x".to_owned(),
            extra: Value::Null,
        };

        let value = to_value(&annotated, &cache).unwrap();
        assert_eq!(value, json!({ "label": "x", "extra": null }));
    }

    #[test]
    fn json_field_passes_through_unchanged() {
        let cache = DescriptorCache::new();
        let annotated = Annotated {
            label: "x".to_owned(),
            extra: json!({ "nested": [1, 2, 3] }),
        };

        let value = to_value(&annotated, &cache).unwrap();
        assert_eq!(value["extra"], json!({ "nested": [1, 2, 3] }));
    }
}
