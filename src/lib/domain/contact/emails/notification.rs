//! Contact notification email template

use askama::Template;

/// The HTML body of the notification email sent for each submission.
///
/// Askama escapes the interpolated values, so user-supplied text cannot
/// inject markup. Line breaks in the message survive through the
/// `pre-wrap` style rather than any reformatting.
#[derive(Debug, Template)]
#[template(path = "contact_notification.html")]
pub struct ContactNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    timestamp: &'a str,
    message: &'a str,
}

impl<'a> ContactNotificationTemplate<'a> {
    /// Create a new contact notification template
    pub fn new(name: &'a str, email: &'a str, timestamp: &'a str, message: &'a str) -> Self {
        Self {
            name,
            email,
            timestamp,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_template_embeds_all_fields() -> TestResult {
        let template = ContactNotificationTemplate::new(
            "Ada",
            "ada@example.com",
            "2024-01-01T00:00:00.000Z",
            "Hello there",
        );

        let html = template.render()?;

        assert!(html.contains("Ada"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("2024-01-01T00:00:00.000Z"));
        assert!(html.contains("Hello there"));
        assert!(html.contains("mailto:ada@example.com"));

        Ok(())
    }

    #[test]
    fn test_template_escapes_markup() -> TestResult {
        let template = ContactNotificationTemplate::new(
            "<script>alert(1)</script>",
            "ada@example.com",
            "2024-01-01T00:00:00.000Z",
            "a < b",
        );

        let html = template.render()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &lt; b"));

        Ok(())
    }
}
