//! Email communication modules

pub mod email_address;
pub mod mailer;
