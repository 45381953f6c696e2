//! The narrow interface to the host messaging framework.

use anyhow::Result;
use async_trait::async_trait;
use shopfront_types::{ControlDescriptor, VisualDocument};

/// An abstract chat host capable of posting and updating interactive
/// messages.
///
/// This trait is the system's entire outward surface: rendering markup,
/// attaching real UI components, and dispatching activation events back to
/// [`InteractionGateway::handle`](crate::InteractionGateway::handle) are the
/// host's concern. Implementations are expected to encode each control's
/// [`ActionCode`](crate::ActionCode) (including the descriptor's
/// generation) into whatever custom-id mechanism the chat service offers.
#[async_trait]
pub trait ChatHost: Send + Sync {
    /// Posts a new interactive message to `target` (a channel, room, or
    /// conversation id) and returns the host's id for the created message.
    async fn post_message(
        &self,
        target: &str,
        document: &VisualDocument,
        controls: &ControlDescriptor,
    ) -> Result<String>;

    /// Replaces the content and controls of an existing message in place.
    /// Never posts a new message.
    async fn update_message(
        &self,
        message_id: &str,
        document: &VisualDocument,
        controls: &ControlDescriptor,
    ) -> Result<()>;

    /// Sends a short notice visible only to `viewer_id`, used for
    /// rejection feedback.
    async fn send_ephemeral(&self, viewer_id: &str, text: &str) -> Result<()>;
}
