use std::fmt::{self, Display, Formatter};

use bytes::Bytes;
use indexmap::IndexMap;
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue, MetadataMap};
use tonic::{Code, Status};
use tracing::debug;

/// Ordered string-to-string metadata attached to an error response.
///
/// Insertion order is preserved so that entries arrive on the wire in the
/// order they were recorded.
pub type Metadata = IndexMap<String, String>;

/// A fully populated error response, ready to be handed to the hosting RPC
/// framework.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Short machine-readable label, e.g. `NotFound`.
    pub name: String,
    /// gRPC status code signaling the failure category to the remote caller.
    pub code: Code,
    /// Fixed human-readable summary.
    pub message: String,
    /// Free-text elaboration of this specific failure. Empty by default.
    pub details: String,
    /// Side-channel data attached to the response. Empty by default.
    pub metadata: Metadata,
}

impl ErrorResponse {
    /// Construct a response with empty details and metadata.
    pub fn new(name: impl Into<String>, code: Code, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code,
            message: message.into(),
            details: String::new(),
            metadata: Metadata::new(),
        }
    }

    /// Set the details text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Set the metadata mapping.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Convert the response into the status the RPC framework serializes.
    pub fn status(&self) -> Status {
        self.clone().into()
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;
        if !self.details.is_empty() {
            write!(f, " ({})", self.details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

impl From<ErrorResponse> for Status {
    fn from(response: ErrorResponse) -> Self {
        let metadata = grpc_metadata(&response.metadata);
        Status::with_details_and_metadata(
            response.code,
            response.message,
            Bytes::from(response.details),
            metadata,
        )
    }
}

/// A partially specified status, for callers constructing one ad hoc rather
/// than through the registry.
///
/// Missing parts keep their wire defaults when built: the code falls back to
/// [`Code::Unknown`] and absent text or metadata stays empty.
#[derive(Debug, Default, Clone)]
pub struct StatusParts {
    /// Status code, if known.
    pub code: Option<Code>,
    /// Human-readable failure text, if known. Becomes the status message.
    pub details: Option<String>,
    /// Metadata to attach, if any.
    pub metadata: Option<Metadata>,
}

impl StatusParts {
    /// Construct an empty set of parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code.
    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the failure text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Build the status from whichever parts were supplied.
    pub fn build(self) -> Status {
        let code = self.code.unwrap_or(Code::Unknown);
        let message = self.details.unwrap_or_default();
        let metadata = match &self.metadata {
            Some(metadata) => grpc_metadata(metadata),
            None => MetadataMap::new(),
        };
        Status::with_metadata(code, message, metadata)
    }
}

/// Build a status from whichever of the three parts are known.
///
/// Shorthand for assembling [`StatusParts`] when all parts are already in
/// hand as options.
pub fn status_from_parts(
    code: Option<Code>,
    details: Option<String>,
    metadata: Option<Metadata>,
) -> Status {
    StatusParts {
        code,
        details,
        metadata,
    }
    .build()
}

/// Convert ordered metadata into the ASCII form gRPC carries on the wire.
///
/// Entries that cannot be represented as gRPC metadata are skipped, not
/// fatal: the response itself must still reach the caller.
fn grpc_metadata(metadata: &Metadata) -> MetadataMap {
    let mut map = MetadataMap::with_capacity(metadata.len());
    for (key, value) in metadata {
        let parsed_key = match AsciiMetadataKey::from_bytes(key.as_bytes()) {
            Ok(parsed_key) => parsed_key,
            Err(_) => {
                debug!(key = key.as_str(), "skipping invalid gRPC metadata key");
                continue;
            }
        };
        let parsed_value = match AsciiMetadataValue::try_from(value.as_str()) {
            Ok(parsed_value) => parsed_value,
            Err(_) => {
                debug!(key = key.as_str(), "skipping non-ASCII metadata value");
                continue;
            }
        };
        map.insert(parsed_key, parsed_value);
    }
    map
}
