use rn_grpc_schema::{Message, Method, Service};
use tracing::{debug, warn};

use crate::{
    casing::{lower, upper},
    error::GenError,
    kinds::{translate, KindOutcome, OPAQUE_TYPE},
    options::UnsupportedPolicy,
    template::{render, Bindings},
};

/// One type alias per message, one body line per field.
pub const MESSAGE_TEMPLATE: &str = "export type $messageName$ = {
\t$*fieldNames*$: $*fieldTypes*$;
};";

pub const METHOD_TEMPLATE: &str =
    "\t$methodName$: ($inputKindLower$: $inputKindUpper$) => Promise<$outputKindUpper$>;";

/// A field that made it into its message's output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub ty:   String,
}

/// Resolves the output fields of `message` in declaration order, applying
/// `policy` to fields whose kind cannot be translated.
pub fn message_fields(message: &Message, policy: UnsupportedPolicy) -> Result<Vec<FieldEntry>, GenError> {
    let mut entries = Vec::with_capacity(message.fields.len());

    for field in &message.fields {
        let ty = match translate(field) {
            KindOutcome::Supported(ty) => ty,
            KindOutcome::Unsupported(reason) => match policy {
                UnsupportedPolicy::Omit => {
                    warn!(message = %message.name, field = %field.name, %reason, "omitting field");
                    continue;
                }
                UnsupportedPolicy::Opaque => {
                    warn!(message = %message.name, field = %field.name, %reason, "typing field as {}", OPAQUE_TYPE);
                    OPAQUE_TYPE.to_string()
                }
                UnsupportedPolicy::Fail => {
                    return Err(GenError::UnsupportedKind {
                        message: message.name.clone(),
                        field:   field.name.clone(),
                        kind:    field.kind.to_string(),
                    });
                }
            },
        };
        entries.push(FieldEntry {
            name: lower(&field.name),
            ty,
        });
    }

    Ok(entries)
}

/// Renders `message` followed by the fragments of all messages nested in it,
/// depth first. Nested types are emitted as siblings, one after another.
pub fn message_fragment(message: &Message, policy: UnsupportedPolicy) -> Result<String, GenError> {
    let entries = message_fields(message, policy)?;

    let mut bindings = Bindings::new().scalar("messageName", upper(&message.name));
    bindings.set_list("fieldNames", entries.iter().map(|e| e.name.as_str()));
    bindings.set_list("fieldTypes", entries.iter().map(|e| e.ty.as_str()));

    let mut parts = vec![render(MESSAGE_TEMPLATE, &bindings)];
    debug!(message = %message.name, fields = entries.len(), "rendered message");

    for nested in &message.messages {
        parts.push(message_fragment(nested, policy)?);
    }

    Ok(parts.join("\n"))
}

pub fn method_fragment(method: &Method) -> String {
    let bindings = Bindings::new()
        .scalar("methodName", lower(&method.name))
        .scalar("inputKindLower", lower(&method.input))
        .scalar("inputKindUpper", upper(&method.input))
        .scalar("outputKindUpper", upper(&method.output));

    debug!(method = %method.name, "rendered method");
    render(METHOD_TEMPLATE, &bindings)
}

/// Method signatures for every method of every service, in declaration order.
pub fn service_methods(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .flat_map(|service| service.methods.iter())
        .map(method_fragment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rn_grpc_schema::{Field, FieldKind};

    #[test]
    fn simple_message() {
        let message = Message::new("Foo")
            .with_field(Field::new("a", FieldKind::Bool))
            .with_field(Field::new("b", FieldKind::String));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type Foo = {\n\ta: boolean;\n\tb: string;\n};"
        );
    }

    #[test]
    fn names_are_case_flipped() {
        let message = Message::new("point")
            .with_field(Field::new("X", FieldKind::Double))
            .with_field(Field::message("Origin", "vec"));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type Point = {\n\tx: number;\n\torigin: Vec;\n};"
        );
    }

    #[test]
    fn empty_message_has_empty_body() {
        let message = Message::new("Empty");
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type Empty = {\n};"
        );
    }

    #[test]
    fn unsupported_field_is_omitted() {
        let message = Message::new("Foo")
            .with_field(Field::new("a", FieldKind::Int32))
            .with_field(Field::new("color", FieldKind::Enum));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type Foo = {\n\ta: number;\n};"
        );
    }

    #[test]
    fn unsupported_field_is_opaque() {
        let message = Message::new("Foo").with_field(Field::new("blob", FieldKind::Bytes));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Opaque).unwrap(),
            "export type Foo = {\n\tblob: unknown;\n};"
        );
    }

    #[test]
    fn unsupported_field_fails() {
        let message = Message::new("Foo").with_field(Field::new("blob", FieldKind::Bytes));
        match message_fragment(&message, UnsupportedPolicy::Fail) {
            Err(GenError::UnsupportedKind { message, field, kind }) => {
                assert_eq!(message, "Foo");
                assert_eq!(field, "blob");
                assert_eq!(kind, "bytes");
            }
            other => panic!("expected UnsupportedKind, got {:?}", other),
        }
    }

    #[test]
    fn omitted_fields_keep_names_and_types_aligned() {
        let message = Message::new("Foo")
            .with_field(Field::new("a", FieldKind::Enum))
            .with_field(Field::new("b", FieldKind::Bool))
            .with_field(Field::new("c", FieldKind::Group))
            .with_field(Field::new("d", FieldKind::String));
        let entries = message_fields(&message, UnsupportedPolicy::Omit).unwrap();
        assert_eq!(
            entries,
            vec![
                FieldEntry { name: "b".into(), ty: "boolean".into() },
                FieldEntry { name: "d".into(), ty: "string".into() },
            ]
        );
    }

    #[test]
    fn nested_messages_follow_parent() {
        let message = Message::new("Outer")
            .with_field(Field::message("inner", "Inner"))
            .with_message(
                Message::new("Inner")
                    .with_field(Field::new("id", FieldKind::Uint64))
                    .with_message(Message::new("Deep").with_field(Field::new("ok", FieldKind::Bool))),
            )
            .with_message(Message::new("Other"));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type Outer = {\n\tinner: Inner;\n};\n\
             export type Inner = {\n\tid: number;\n};\n\
             export type Deep = {\n\tok: boolean;\n};\n\
             export type Other = {\n};"
        );
    }

    #[test]
    fn identical_single_field_messages_stay_separate() {
        let message = Message::new("A")
            .with_field(Field::new("id", FieldKind::String))
            .with_message(Message::new("B").with_field(Field::new("id", FieldKind::String)));
        assert_eq!(
            message_fragment(&message, UnsupportedPolicy::Omit).unwrap(),
            "export type A = {\n\tid: string;\n};\nexport type B = {\n\tid: string;\n};"
        );
    }

    #[test]
    fn method_signature() {
        let method = Method::new("bar", "Req", "Resp");
        assert_eq!(method_fragment(&method), "\tbar: (req: Req) => Promise<Resp>;");

        let method = Method::new("GetUser", "getUserRequest", "user");
        assert_eq!(
            method_fragment(&method),
            "\tgetUser: (getUserRequest: GetUserRequest) => Promise<User>;"
        );
    }

    #[test]
    fn methods_across_services_in_order() {
        let services = vec![
            Service::new("A").with_method(Method::new("One", "X", "Y")),
            Service::new("Empty"),
            Service::new("B")
                .with_method(Method::new("Two", "X", "Y"))
                .with_method(Method::new("Three", "X", "Y")),
        ];
        let methods = service_methods(&services);
        assert_eq!(methods.len(), 3);
        assert!(methods[0].starts_with("\tone:"));
        assert!(methods[1].starts_with("\ttwo:"));
        assert!(methods[2].starts_with("\tthree:"));
    }
}
