//! Rendering of the admin notification email.

/// Escape HTML-significant characters in user-provided text.
///
/// Applied to every field interpolated into the notification so a
/// submission cannot inject markup into the email.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A rendered notification ready to hand to an `EmailSender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub subject: String,
    pub html: String,
}

/// Render the admin notification for a stored submission.
#[must_use]
pub fn render_notification(name: &str, email: &str, message: &str) -> NotificationEmail {
    let name = escape_html(name);
    let email = escape_html(email);
    let message = escape_html(message);

    NotificationEmail {
        subject: format!("New Contact Message from {name}"),
        html: format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {name}</p>\
             <p><strong>Email:</strong> {email}</p>\
             <p><strong>Message:</strong></p>\
             <p>{message}</p>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x" onclick='y'> & more"#),
            "&lt;a href=&quot;x&quot; onclick=&#39;y&#39;&gt; &amp; more"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Hello, world. 123"), "Hello, world. 123");
    }

    #[test]
    fn subject_contains_escaped_name() {
        let email = render_notification("Jane & Co", "jane@example.com", "Hi");
        assert_eq!(email.subject, "New Contact Message from Jane &amp; Co");
    }

    #[test]
    fn body_fields_are_escaped() {
        let email = render_notification(
            "<script>alert(1)</script>",
            "jane@example.com",
            "a < b > c",
        );

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(email.html.contains("a &lt; b &gt; c"));
    }

    #[test]
    fn body_layout_includes_all_sections() {
        let email = render_notification("Jane", "jane@example.com", "Hello there");

        assert!(email.html.starts_with("<h2>New Contact Form Submission</h2>"));
        assert!(email.html.contains("<p><strong>Name:</strong> Jane</p>"));
        assert!(email
            .html
            .contains("<p><strong>Email:</strong> jane@example.com</p>"));
        assert!(email.html.contains("<p><strong>Message:</strong></p>"));
        assert!(email.html.ends_with("<p>Hello there</p>"));
    }
}
