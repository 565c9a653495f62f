use tokio::sync::mpsc;

/// Outbound side of one client connection.
///
/// Frames are already-encoded JSON text. The connection's writer task drains
/// the receiving half onto the socket in order.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl ClientHandle {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Creates a handle together with the receiver its writer task will drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Enqueues a frame. Never blocks; returns `false` once the writer is gone.
    pub fn send_text(&self, text: String) -> bool {
        self.tx.send(text).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
