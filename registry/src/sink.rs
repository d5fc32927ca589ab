use tokio::sync::mpsc;
use tonic::Status;

/// A writable response channel that can carry a terminal error.
///
/// Implemented for the channel senders that feed tonic response streams, and
/// by tests that want to observe emissions directly.
pub trait ErrorSink {
    /// Emit `status` as an error on this channel.
    fn emit_error(&mut self, status: Status);
}

impl<T> ErrorSink for mpsc::UnboundedSender<Result<T, Status>> {
    fn emit_error(&mut self, status: Status) {
        // A dropped receiver means no one is left to observe the error.
        let _ = self.send(Err(status));
    }
}

impl ErrorSink for Vec<Status> {
    fn emit_error(&mut self, status: Status) {
        self.push(status);
    }
}
