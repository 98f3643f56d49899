use rn_grpc_schema::{Field, FieldKind};

use crate::casing::upper;

pub const BOOLEAN_TYPE: &str = "boolean";
pub const NUMBER_TYPE:  &str = "number";
pub const STRING_TYPE:  &str = "string";
/// Type emitted for unsupported fields under [`crate::options::UnsupportedPolicy::Opaque`].
pub const OPAQUE_TYPE:  &str = "unknown";

/// Result of translating a field kind into an output type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindOutcome {
    Supported(String),
    Unsupported(String),
}

/// Output type name for a primitive kind, or `None` if the kind is not a
/// primitive the generator knows.
pub fn primitive_type(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Bool => Some(BOOLEAN_TYPE),
        FieldKind::Int32
        | FieldKind::Sint32
        | FieldKind::Uint32
        | FieldKind::Int64
        | FieldKind::Sint64
        | FieldKind::Uint64
        | FieldKind::Sfixed32
        | FieldKind::Fixed32
        | FieldKind::Float
        | FieldKind::Sfixed64
        | FieldKind::Fixed64
        | FieldKind::Double => Some(NUMBER_TYPE),
        FieldKind::String => Some(STRING_TYPE),
        FieldKind::Bytes | FieldKind::Enum | FieldKind::Group | FieldKind::Message => None,
    }
}

/// Translates a field's kind. Message references resolve to the capitalized
/// name of the referenced message.
pub fn translate(field: &Field) -> KindOutcome {
    if let Some(ty) = primitive_type(field.kind) {
        return KindOutcome::Supported(ty.to_string());
    }
    match (field.kind, field.type_name.as_deref()) {
        (FieldKind::Message, Some(name)) if !name.is_empty() => KindOutcome::Supported(upper(name)),
        (FieldKind::Message, _) => {
            KindOutcome::Unsupported("message reference without a type name".to_string())
        }
        (kind, _) => KindOutcome::Unsupported(format!("{} fields are not supported", kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_table() {
        assert_eq!(primitive_type(FieldKind::Bool), Some("boolean"));
        assert_eq!(primitive_type(FieldKind::String), Some("string"));
        for kind in [
            FieldKind::Int32,
            FieldKind::Sint64,
            FieldKind::Uint64,
            FieldKind::Fixed32,
            FieldKind::Sfixed64,
            FieldKind::Float,
            FieldKind::Double,
        ] {
            assert_eq!(primitive_type(kind), Some("number"), "{}", kind);
        }
    }

    #[test]
    fn message_reference_is_capitalized() {
        let field = Field::message("owner", "user");
        assert_eq!(translate(&field), KindOutcome::Supported("User".to_string()));
    }

    #[test]
    fn unsupported_kinds() {
        for kind in [FieldKind::Bytes, FieldKind::Enum, FieldKind::Group] {
            let outcome = translate(&Field::new("f", kind));
            assert!(matches!(outcome, KindOutcome::Unsupported(_)), "{}", kind);
        }
        let dangling = Field::new("f", FieldKind::Message);
        assert!(matches!(translate(&dangling), KindOutcome::Unsupported(_)));
    }
}
