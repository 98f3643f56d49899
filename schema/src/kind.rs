use serde::{Deserialize, Serialize};
use std::fmt;

/// The primitive or reference kind of a schema field.
///
/// Numeric kinds keep their protobuf width and signedness even though the
/// generator collapses them, so the model stays a faithful image of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Bool,
    Int32,
    Sint32,
    Uint32,
    Int64,
    Sint64,
    Uint64,
    Sfixed32,
    Fixed32,
    Float,
    Sfixed64,
    Fixed64,
    Double,
    String,
    Bytes,
    Enum,
    Group,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 18] = [
        FieldKind::Bool,
        FieldKind::Int32,
        FieldKind::Sint32,
        FieldKind::Uint32,
        FieldKind::Int64,
        FieldKind::Sint64,
        FieldKind::Uint64,
        FieldKind::Sfixed32,
        FieldKind::Fixed32,
        FieldKind::Float,
        FieldKind::Sfixed64,
        FieldKind::Fixed64,
        FieldKind::Double,
        FieldKind::String,
        FieldKind::Bytes,
        FieldKind::Enum,
        FieldKind::Group,
        FieldKind::Message,
    ];

    /// The lowercase name used in JSON schemas and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool     => "bool",
            FieldKind::Int32    => "int32",
            FieldKind::Sint32   => "sint32",
            FieldKind::Uint32   => "uint32",
            FieldKind::Int64    => "int64",
            FieldKind::Sint64   => "sint64",
            FieldKind::Uint64   => "uint64",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Fixed32  => "fixed32",
            FieldKind::Float    => "float",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Fixed64  => "fixed64",
            FieldKind::Double   => "double",
            FieldKind::String   => "string",
            FieldKind::Bytes    => "bytes",
            FieldKind::Enum     => "enum",
            FieldKind::Group    => "group",
            FieldKind::Message  => "message",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
