use std::collections::HashMap;

use tonic::Code;
use tracing::debug;

use crate::{Error, ErrorKind, ErrorResponse, ErrorSink, Metadata};

/// Per-call customization of a resolved template.
///
/// `details` and `metadata` replace the template fields wholesale; metadata
/// is never merged with the template's. `source` only labels the diagnostic
/// log line and does not appear in the response.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    source: Option<String>,
    details: Option<String>,
    metadata: Option<Metadata>,
}

impl Overrides {
    /// No customization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the producing call site in the diagnostic log line.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Replace the template details.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Replace the template metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// The catalog mapping each [`ErrorKind`] to its response template.
///
/// Templates are immutable once stored; resolution hands out customized
/// copies. Extending the catalog takes `&mut self`, so a registry shared
/// across tasks can be read freely but must be behind a lock to be extended
/// at runtime.
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    templates: HashMap<ErrorKind, ErrorResponse>,
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorRegistry {
    /// Construct a registry seeded with the default catalog.
    pub fn new() -> Self {
        let defaults = [
            (
                ErrorKind::InvalidArgument,
                "InvalidArgument",
                Code::InvalidArgument,
                "Invalid argument provided.",
            ),
            (
                ErrorKind::FailedPrecondition,
                "FailedPrecondition",
                Code::FailedPrecondition,
                "Operation failed precondition check.",
            ),
            (
                ErrorKind::DeadlineExceeded,
                "DeadlineExceeded",
                Code::DeadlineExceeded,
                "Deadline for the operation exceeded.",
            ),
            (
                ErrorKind::NotFound,
                "NotFound",
                Code::NotFound,
                "Resource not found.",
            ),
            (
                ErrorKind::AlreadyExists,
                "AlreadyExists",
                Code::AlreadyExists,
                "Resource already exists.",
            ),
            (
                ErrorKind::PermissionDenied,
                "PermissionDenied",
                Code::PermissionDenied,
                "Permission denied for the operation.",
            ),
            (
                ErrorKind::Internal,
                "Internal",
                Code::Internal,
                "Internal server error.",
            ),
            (
                ErrorKind::Unavailable,
                "Unavailable",
                Code::Unavailable,
                "Service unavailable.",
            ),
            (
                ErrorKind::DataLoss,
                "DataLoss",
                Code::DataLoss,
                "Data loss occurred.",
            ),
            (
                ErrorKind::Unauthenticated,
                "Unauthenticated",
                Code::Unauthenticated,
                "Request not authenticated.",
            ),
            (
                ErrorKind::Validation,
                "Validation",
                Code::InvalidArgument,
                "gRPC validation error occurred.",
            ),
            (
                ErrorKind::Unauthorized,
                "Unauthorized",
                Code::Unauthenticated,
                "gRPC unauthorized access.",
            ),
            (
                ErrorKind::ResourceNotFound,
                "ResourceNotFound",
                Code::NotFound,
                "gRPC resource not found.",
            ),
        ];
        let mut templates = HashMap::with_capacity(defaults.len());
        for (kind, name, code, message) in defaults {
            let template = match kind {
                // The only template that ships with details pre-filled.
                ErrorKind::Internal => ErrorResponse::new(name, code, message)
                    .with_details("Server ran into unexpected internal error."),
                _ => ErrorResponse::new(name, code, message),
            };
            templates.insert(kind, template);
        }
        Self { templates }
    }

    /// Insert or overwrite the template for `kind`.
    pub fn register(&mut self, kind: ErrorKind, template: ErrorResponse) {
        self.templates.insert(kind, template);
    }

    /// Get the stored template for `kind`, if any.
    pub fn template(&self, kind: &ErrorKind) -> Option<&ErrorResponse> {
        self.templates.get(kind)
    }

    /// Iterate over all registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &ErrorKind> {
        self.templates.keys()
    }

    /// Produce a customized copy of the template for `kind`.
    ///
    /// Every production emits one diagnostic log line carrying the kind and,
    /// when supplied, the source label.
    pub fn resolve(&self, kind: &ErrorKind, overrides: Overrides) -> Result<ErrorResponse, Error> {
        let Overrides {
            source,
            details,
            metadata,
        } = overrides;
        let response = self.customized(kind, details, metadata)?;
        debug!(
            kind = %kind,
            source = source.as_deref(),
            code = ?response.code,
            "produced error response"
        );
        Ok(response)
    }

    /// Resolve the template for `kind` and emit it as the terminal error on
    /// `stream`.
    pub fn emit_to_stream<S: ErrorSink>(
        &self,
        stream: &mut S,
        kind: &ErrorKind,
        overrides: Overrides,
    ) -> Result<(), Error> {
        let response = self.resolve(kind, overrides)?;
        stream.emit_error(response.into());
        Ok(())
    }

    /// Resolve the template for `kind` and hand it to `callback`.
    ///
    /// The callback is invoked exactly once, synchronously.
    pub fn invoke_callback<F>(
        &self,
        callback: F,
        kind: &ErrorKind,
        overrides: Overrides,
    ) -> Result<(), Error>
    where
        F: FnOnce(ErrorResponse),
    {
        let response = self.resolve(kind, overrides)?;
        callback(response);
        Ok(())
    }

    /// Convert a sequence of validation issue messages into the VALIDATION
    /// response.
    ///
    /// Issues map to metadata entries `error_0`, `error_1`, ... in order and
    /// the details field joins the messages with ", ". An empty sequence
    /// returns the template unmodified.
    pub fn validation_failure<I>(&self, issues: I) -> Result<ErrorResponse, Error>
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        let messages: Vec<String> = issues.into_iter().map(|issue| issue.to_string()).collect();
        if messages.is_empty() {
            return self.resolve(&ErrorKind::Validation, Overrides::new());
        }
        let metadata: Metadata = messages
            .iter()
            .enumerate()
            .map(|(i, message)| (format!("error_{}", i), message.clone()))
            .collect();
        self.resolve(
            &ErrorKind::Validation,
            Overrides::new()
                .details(messages.join(", "))
                .metadata(metadata),
        )
    }

    /// Pure lookup and override application, free of side effects.
    fn customized(
        &self,
        kind: &ErrorKind,
        details: Option<String>,
        metadata: Option<Metadata>,
    ) -> Result<ErrorResponse, Error> {
        let mut response = self
            .templates
            .get(kind)
            .cloned()
            .ok_or_else(|| Error::UnknownKind(kind.clone()))?;
        if let Some(details) = details {
            response.details = details;
        }
        if let Some(metadata) = metadata {
            response.metadata = metadata;
        }
        Ok(response)
    }
}
