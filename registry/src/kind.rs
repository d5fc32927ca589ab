use std::fmt::{self, Display, Formatter};

/// Symbolic name identifying a category of failure.
///
/// The well-known kinds cover the standard gRPC status space
/// <https://grpc.github.io/grpc/core/md_doc_statuscodes.html> plus a few
/// service-level aliases. Hosts can mint additional kinds with
/// [`ErrorKind::custom`]; a custom kind must be registered with the registry
/// before it can be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request argument was malformed.
    InvalidArgument,
    /// The system is not in the state required for the operation.
    FailedPrecondition,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded,
    /// The requested resource does not exist.
    NotFound,
    /// The resource a caller attempted to create already exists.
    AlreadyExists,
    /// The caller lacks permission for the operation.
    PermissionDenied,
    /// An unexpected failure of the service itself.
    Internal,
    /// The service is currently unable to handle the request.
    Unavailable,
    /// Unrecoverable data loss or corruption.
    DataLoss,
    /// The request carries no valid authentication credentials.
    Unauthenticated,
    /// The request payload failed schema validation.
    Validation,
    /// Authenticated but not authorized for the resource.
    Unauthorized,
    /// Alias of NOT_FOUND kept for hosts that report resource lookups
    /// distinctly.
    ResourceNotFound,
    /// A host-defined kind, identified by its tag.
    Custom(String),
}

impl ErrorKind {
    /// The kinds pre-populated in every default registry.
    pub const DEFAULTS: [ErrorKind; 13] = [
        ErrorKind::InvalidArgument,
        ErrorKind::FailedPrecondition,
        ErrorKind::DeadlineExceeded,
        ErrorKind::NotFound,
        ErrorKind::AlreadyExists,
        ErrorKind::PermissionDenied,
        ErrorKind::Internal,
        ErrorKind::Unavailable,
        ErrorKind::DataLoss,
        ErrorKind::Unauthenticated,
        ErrorKind::Validation,
        ErrorKind::Unauthorized,
        ErrorKind::ResourceNotFound,
    ];

    /// Construct a host-defined kind from its tag.
    pub fn custom(tag: impl Into<String>) -> Self {
        ErrorKind::Custom(tag.into())
    }

    /// Get the canonical tag for the kind.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorKind::DeadlineExceeded => "DEADLINE_EXCEEDED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::PermissionDenied => "PERMISSION_DENIED",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unavailable => "UNAVAILABLE",
            ErrorKind::DataLoss => "DATA_LOSS",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorKind::Custom(tag) => tag,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
