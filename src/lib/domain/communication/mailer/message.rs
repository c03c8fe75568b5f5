//! Email message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::communication::email_address::EmailAddress;

/// An outbound email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The sender, as a full mailbox including the display name
    pub from: String,

    /// The recipient of the email
    pub to: EmailAddress,

    /// The address replies should go to
    pub reply_to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html: String,
}

/// The provider's acknowledgement of an accepted message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryReceipt {
    /// Opaque provider-assigned identifier
    #[schema(example = "abc123")]
    pub id: String,
}
