//! Shared email content templates
//!
//! Canonical content generators for registration confirmation emails,
//! used by both production (SES) and mock email services.

/// Generate plain-text body for a registration confirmation email.
pub fn registration_confirmation_text(
    recipient_name: &str,
    event_title: &str,
    venue: &str,
    date: &str,
    event_url: &str,
) -> String {
    format!(
        "Hi {}!\n\n\
        Your registration for '{}' is confirmed.\n\n\
        When: {}\n\
        Where: {}\n\n\
        Event details:\n\
        {}\n\n\
        See you there!\n\
        The CampusEvents Team",
        recipient_name, event_title, date, venue, event_url
    )
}

/// Generate styled HTML body for a registration confirmation email.
pub fn registration_confirmation_html(
    recipient_name: &str,
    event_title: &str,
    venue: &str,
    date: &str,
    event_url: &str,
) -> String {
    format!(
        r#"
            <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #2563eb;">You're registered for {event_title}!</h2>

                    <p>Hi {recipient_name}!</p>

                    <p>Your registration for '<strong>{event_title}</strong>' is confirmed.</p>

                    <p><strong>When:</strong> {date}<br>
                       <strong>Where:</strong> {venue}</p>

                    <div style="text-align: center; margin: 30px 0;">
                        <a href="{event_url}"
                           style="background-color: #2563eb; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block; font-weight: bold;">
                            View Event
                        </a>
                    </div>

                    <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">

                    <p style="color: #666; font-size: 12px;">
                        See you there!<br>
                        The CampusEvents Team
                    </p>
                </div>
            </body>
            </html>
            "#,
        event_title = event_title,
        recipient_name = recipient_name,
        venue = venue,
        date = date,
        event_url = event_url
    )
}
