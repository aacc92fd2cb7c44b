pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// The outcome of a single outbound notification.
///
/// Notifications never fail the run, so every attempt resolves to one of these
/// and the caller decides whether it cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The chat platform acknowledged the message.
    Sent { channel_id: String, response: String },
    /// The call failed at the transport level or was rejected by the API.
    Failed { channel_id: String, reason: String },
}

impl Delivery {
    pub fn channel_id(&self) -> &str {
        match self {
            Delivery::Sent { channel_id, .. } | Delivery::Failed { channel_id, .. } => channel_id,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent { .. })
    }
}
