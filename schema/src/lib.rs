//! In-memory schema model for the rn-grpc generator.
//!
//! A schema is an ordered list of [`SchemaFile`]s, each holding top-level
//! [`Message`]s (with nested messages and [`Field`]s) and [`Service`]s (with
//! [`Method`]s). Declaration order is preserved everywhere since generated
//! output follows it.
//!
//! ```
//! use rn_grpc_schema::*;
//!
//! let file = SchemaFile::new("greeter.proto")
//!     .with_message(Message::new("HelloRequest").with_field(Field::new("name", FieldKind::String)))
//!     .with_service(Service::new("Greeter").with_method(Method::new("SayHello", "HelloRequest", "HelloReply")));
//!
//! assert_eq!(file.messages[0].fields[0].kind, FieldKind::String);
//! assert_eq!(file.services[0].methods[0].output, "HelloReply");
//! ```

pub mod kind;
pub mod model;

pub use kind::*;
pub use model::*;
