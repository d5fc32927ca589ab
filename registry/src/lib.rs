//! Catalog of reusable gRPC error responses.
//!
//! Services pick a symbolic [`ErrorKind`] and the [`ErrorRegistry`] produces a
//! fully populated [`ErrorResponse`] for it, optionally customized per call
//! with replacement details and metadata. The response can be returned
//! directly, emitted as the terminal error of a response stream, or handed to
//! a unary completion callback. Registry templates are immutable; every
//! resolution returns a fresh copy, so a shared registry can serve concurrent
//! requests without cross-call leakage.
#![warn(missing_docs)]

mod error;
mod kind;
mod registry;
mod response;
mod sink;

pub use error::Error;
pub use kind::ErrorKind;
pub use registry::{ErrorRegistry, Overrides};
pub use response::{status_from_parts, ErrorResponse, Metadata, StatusParts};
pub use sink::ErrorSink;

pub use tonic::{Code, Status};
