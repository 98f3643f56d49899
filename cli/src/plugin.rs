//! protoc plugin protocol: `CodeGeneratorRequest` in, `CodeGeneratorResponse` out.
//!
//! Descriptors are converted into the rn-grpc schema model here so the
//! generator itself never sees protobuf types.

use prost::Message as _;
use prost_types::{
    compiler::{CodeGeneratorRequest, CodeGeneratorResponse},
    field_descriptor_proto::Type,
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, MethodDescriptorProto,
    ServiceDescriptorProto,
};
use rn_grpc::{generate_all, Field, FieldKind, GenError, GeneratorOptions, Message, Method, SchemaFile, Service};
use tracing::{debug, error};

use crate::sinks::ResponseSink;

/// Decodes a request, generates, and returns the encoded response.
pub fn run(input: &[u8]) -> Result<Vec<u8>, GenError> {
    let request = CodeGeneratorRequest::decode(input).map_err(|e| GenError::Decode(e.to_string()))?;
    Ok(respond(&request).encode_to_vec())
}

/// Builds the response for `request`. Generation failures are reported in the
/// response's `error` field; files generated before the failure are kept.
pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut sink = ResponseSink::default();

    let result = GeneratorOptions::parse_parameter(request.parameter())
        .and_then(|options| generate_all(&files_to_generate(request), &options, &mut sink));

    let error = match result {
        Ok(()) => None,
        Err(e) => {
            error!("{}", e);
            Some(e.to_string())
        }
    };

    CodeGeneratorResponse {
        error,
        file: sink.into_files(),
        ..Default::default()
    }
}

/// The files protoc asked for, in descriptor order.
pub fn files_to_generate(request: &CodeGeneratorRequest) -> Vec<SchemaFile> {
    request
        .proto_file
        .iter()
        .filter(|file| request.file_to_generate.iter().any(|name| name == file.name()))
        .map(convert_file)
        .collect()
}

pub fn convert_file(file: &FileDescriptorProto) -> SchemaFile {
    debug!(file = file.name(), "converting descriptor");
    SchemaFile {
        name:     file.name().to_string(),
        package:  file.package.clone(),
        messages: file.message_type.iter().map(convert_message).collect(),
        services: file.service.iter().map(convert_service).collect(),
    }
}

fn convert_message(message: &DescriptorProto) -> Message {
    Message {
        name:     message.name().to_string(),
        fields:   message.field.iter().map(convert_field).collect(),
        messages: message.nested_type.iter().map(convert_message).collect(),
    }
}

fn convert_field(field: &FieldDescriptorProto) -> Field {
    let kind = field_kind(field.r#type());
    let type_name = match kind {
        FieldKind::Message => Some(short_name(field.type_name()).to_string()),
        _ => None,
    };
    Field {
        name: field.name().to_string(),
        kind,
        type_name,
    }
}

fn convert_service(service: &ServiceDescriptorProto) -> Service {
    Service {
        name:    service.name().to_string(),
        methods: service.method.iter().map(convert_method).collect(),
    }
}

fn convert_method(method: &MethodDescriptorProto) -> Method {
    Method::new(
        method.name(),
        short_name(method.input_type()),
        short_name(method.output_type()),
    )
}

pub fn field_kind(ty: Type) -> FieldKind {
    match ty {
        Type::Double   => FieldKind::Double,
        Type::Float    => FieldKind::Float,
        Type::Int64    => FieldKind::Int64,
        Type::Uint64   => FieldKind::Uint64,
        Type::Int32    => FieldKind::Int32,
        Type::Fixed64  => FieldKind::Fixed64,
        Type::Fixed32  => FieldKind::Fixed32,
        Type::Bool     => FieldKind::Bool,
        Type::String   => FieldKind::String,
        Type::Group    => FieldKind::Group,
        Type::Message  => FieldKind::Message,
        Type::Bytes    => FieldKind::Bytes,
        Type::Uint32   => FieldKind::Uint32,
        Type::Enum     => FieldKind::Enum,
        Type::Sfixed32 => FieldKind::Sfixed32,
        Type::Sfixed64 => FieldKind::Sfixed64,
        Type::Sint32   => FieldKind::Sint32,
        Type::Sint64   => FieldKind::Sint64,
    }
}

/// `.pkg.Outer.Inner` → `Inner`
fn short_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
