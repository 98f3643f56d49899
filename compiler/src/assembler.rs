use rn_grpc_schema::SchemaFile;
use tracing::{info, warn};

use crate::{
    error::GenError,
    fragments::{message_fragment, service_methods},
    options::GeneratorOptions,
    template::{render, unresolved_lists, Bindings},
    traits::Sink,
};

/// Whole-file skeleton of the generated React Native module.
pub const FILE_TEMPLATE: &str = "import {NativeModules} from 'react-native';

const {GrpcModule} = NativeModules;

export type GrpcModule = {
\tsetHost: (host: string) => void;
\tsetPort: (port: number) => void;
$*methods*$
};

$*messages*$

export default GrpcModule as GrpcModule;";

/// Generates the document for one schema file.
pub fn generate_file(file: &SchemaFile, options: &GeneratorOptions) -> Result<String, GenError> {
    let mut messages = Vec::with_capacity(file.messages.len());
    for message in &file.messages {
        messages.push(message_fragment(message, options.unsupported)?);
    }

    let bindings = Bindings::new()
        .list("methods", service_methods(&file.services))
        .list("messages", messages);

    let content = render(FILE_TEMPLATE, &bindings);

    let leftover = unresolved_lists(&content);
    if !leftover.is_empty() {
        warn!(file = %file.name, ?leftover, "generated output still holds list placeholders");
    }

    Ok(content)
}

/// Generates every file in order and hands each document to `sink`.
///
/// The first error stops the batch. Documents already written stay written.
pub fn generate_all<S: Sink>(
    files: &[SchemaFile],
    options: &GeneratorOptions,
    mut sink: S,
) -> Result<(), GenError> {
    for file in files {
        let content = generate_file(file, options)?;
        sink.write(&options.file_name, &content)?;
        info!(source = %file.name, output = %options.file_name, bytes = content.len(), "generated");
    }
    Ok(())
}
