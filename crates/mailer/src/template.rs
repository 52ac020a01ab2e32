//! Notification email content.
//!
//! Mirrors the studio's dark-themed site branding with inline styles
//! only, since email clients ignore stylesheets. A plain-text body rides
//! along for clients that prefer it.

use chrono::Utc;
use thrive_core::html::{escape_attr, escape_html};
use thrive_core::inquiry::{display, Inquiry};

/// Rendered subject and bodies for one inquiry notification.
pub struct InquiryEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl InquiryEmail {
    /// Render the notification for a stored inquiry. Blank fields show
    /// as a placeholder dash rather than disappearing, so the studio can
    /// see at a glance what the visitor skipped.
    pub fn new(inquiry: &Inquiry) -> Self {
        let subject = format!(
            "New Thrive inquiry \u{2014} {} ({})",
            inquiry.name,
            display(inquiry.project_type.as_deref())
        );
        Self {
            subject,
            text: Self::text_body(inquiry),
            html: Self::html_body(inquiry),
        }
    }

    fn text_body(inquiry: &Inquiry) -> String {
        [
            "New inquiry received:".to_string(),
            String::new(),
            format!("Name: {}", inquiry.name),
            format!("Email: {}", inquiry.email),
            format!("Project type: {}", display(inquiry.project_type.as_deref())),
            format!("Budget: {}", display(inquiry.budget.as_deref())),
            format!("Timeline: {}", display(inquiry.timeline.as_deref())),
            String::new(),
            "Details:".to_string(),
            display(inquiry.message.as_deref()).to_string(),
            String::new(),
            format!("Page URL: {}", display(inquiry.page_url.as_deref())),
            format!("Referrer: {}", display(inquiry.referrer.as_deref())),
        ]
        .join("\n")
    }

    fn html_body(inquiry: &Inquiry) -> String {
        let name = escape_html(&inquiry.name);
        let email_attr = escape_attr(&inquiry.email);
        let email_text = escape_html(&inquiry.email);
        let project_type = escape_html(display(inquiry.project_type.as_deref()));
        let budget = escape_html(display(inquiry.budget.as_deref()));
        let timeline = escape_html(display(inquiry.timeline.as_deref()));
        let message = escape_html(display(inquiry.message.as_deref()));
        let page_url = escape_html(display(inquiry.page_url.as_deref()));
        let referrer = escape_html(display(inquiry.referrer.as_deref()));

        let email_row = info_row(
            "Email",
            &format!(
                r#"<a href="mailto:{email_attr}" style="color:#22d3ee;text-decoration:none;font-weight:900;">{email_text}</a>"#
            ),
        );
        let view_page_button = match &inquiry.page_url {
            Some(url) => format!(
                r#"<a href="{}" style="background:rgba(255,255,255,.08);color:#fff;padding:10px 14px;border-radius:999px;text-decoration:none;font-weight:800;font-size:13px;">View page</a>"#,
                escape_attr(url)
            ),
            None => String::new(),
        };
        let sent_at = Utc::now().format("%-m/%-d/%Y, %-I:%M:%S %p");

        format!(
            r#"<div style="margin:0;padding:0;background:#0b0b0f;font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial;">
  <div style="max-width:640px;margin:0 auto;padding:28px;">
    <div style="background:linear-gradient(135deg,#ff2ea6,#7c3aed,#22d3ee);padding:2px;border-radius:18px;">
      <div style="background:#0b0b0f;border-radius:16px;padding:22px 22px 18px;">
        <div style="display:flex;align-items:center;gap:12px;">
          <div style="width:14px;height:14px;border-radius:999px;background:#ff2ea6;box-shadow:0 0 0 4px rgba(255,46,166,.18);"></div>
          <div style="color:#fff;font-weight:900;letter-spacing:.2px;font-size:16px;">Thrive Creative Studios</div>
        </div>
        <div style="margin-top:10px;color:#d7d7e0;font-size:13px;line-height:1.5;">New contact form inquiry received.</div>
      </div>
    </div>
    <div style="margin-top:16px;background:#11111a;border:1px solid rgba(255,255,255,.08);border-radius:18px;padding:20px;">
      <div style="color:#ffffff;font-size:18px;font-weight:900;margin-bottom:6px;">New inquiry: {name}</div>
      <div style="color:#aab0c0;font-size:13px;margin-bottom:14px;">{project_type} &bull; {budget} &bull; {timeline}</div>
      <div style="display:grid;grid-template-columns:1fr;gap:10px;">
        {email_row}
        {project_type_row}
        {budget_row}
        {timeline_row}
      </div>
      <div style="margin-top:16px;padding:14px;border-radius:14px;background:#0b0b0f;border:1px solid rgba(255,255,255,.06);">
        <div style="color:#fff;font-weight:900;font-size:13px;margin-bottom:8px;">Details</div>
        <div style="color:#d7d7e0;font-size:13px;line-height:1.6;white-space:pre-wrap;">{message}</div>
      </div>
      <div style="margin-top:16px;display:flex;gap:10px;flex-wrap:wrap;">
        <a href="mailto:{email_attr}" style="background:#ff2ea6;color:#0b0b0f;padding:10px 14px;border-radius:999px;text-decoration:none;font-weight:900;font-size:13px;">Reply to client</a>
        {view_page_button}
      </div>
      <div style="margin-top:14px;color:#7f879b;font-size:12px;line-height:1.5;">
        Page URL: <span style="color:#aab0c0;">{page_url}</span><br/>
        Referrer: <span style="color:#aab0c0;">{referrer}</span>
      </div>
    </div>
    <div style="margin-top:14px;color:#6c7386;font-size:12px;text-align:center;">Sent from Thrive Contact Form &bull; {sent_at}</div>
  </div>
</div>"#,
            project_type_row = info_row("Project type", &project_type),
            budget_row = info_row("Budget", &budget),
            timeline_row = info_row("Timeline", &timeline),
        )
    }
}

fn info_row(label: &str, value_html: &str) -> String {
    format!(
        r#"<div style="display:flex;justify-content:space-between;gap:12px;padding:10px 12px;border-radius:12px;background:rgba(255,255,255,.04);border:1px solid rgba(255,255,255,.06);">
  <div style="color:#aab0c0;font-size:12px;font-weight:700;">{}</div>
  <div style="color:#ffffff;font-size:13px;font-weight:800;text-align:right;">{}</div>
</div>"#,
        escape_html(label),
        value_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inquiry() -> Inquiry {
        Inquiry {
            name: "Dana".to_string(),
            email: "dana@client.example".to_string(),
            project_type: Some("Brand".to_string()),
            budget: Some("$5k\u{2013}$10k".to_string()),
            timeline: Some("6 weeks".to_string()),
            message: Some("We need a full refresh.".to_string()),
            page_url: Some("https://thrive.example/contact".to_string()),
            referrer: Some("https://instagram.com".to_string()),
            user_agent: None,
        }
    }

    fn bare_inquiry() -> Inquiry {
        Inquiry {
            name: "Dana".to_string(),
            email: "dana@client.example".to_string(),
            project_type: None,
            budget: None,
            timeline: None,
            message: None,
            page_url: None,
            referrer: None,
            user_agent: None,
        }
    }

    #[test]
    fn subject_names_visitor_and_project_type() {
        let email = InquiryEmail::new(&full_inquiry());
        assert_eq!(email.subject, "New Thrive inquiry \u{2014} Dana (Brand)");
    }

    #[test]
    fn subject_uses_placeholder_for_missing_project_type() {
        let email = InquiryEmail::new(&bare_inquiry());
        assert_eq!(email.subject, "New Thrive inquiry \u{2014} Dana (\u{2014})");
    }

    #[test]
    fn text_body_lists_every_field() {
        let email = InquiryEmail::new(&full_inquiry());
        assert!(email.text.contains("Name: Dana"));
        assert!(email.text.contains("Email: dana@client.example"));
        assert!(email.text.contains("Project type: Brand"));
        assert!(email.text.contains("Budget: $5k\u{2013}$10k"));
        assert!(email.text.contains("Page URL: https://thrive.example/contact"));
    }

    #[test]
    fn text_body_substitutes_placeholders() {
        let email = InquiryEmail::new(&bare_inquiry());
        assert!(email.text.contains("Budget: \u{2014}"));
        assert!(email.text.contains("Referrer: \u{2014}"));
    }

    #[test]
    fn html_escapes_hostile_input() {
        let mut inquiry = full_inquiry();
        inquiry.name = "<script>alert(1)</script>".to_string();
        inquiry.message = Some("a < b & c".to_string());

        let email = InquiryEmail::new(&inquiry);
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(email.html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn html_links_reply_address() {
        let email = InquiryEmail::new(&full_inquiry());
        assert!(email.html.contains(r#"href="mailto:dana@client.example""#));
    }

    #[test]
    fn view_page_button_only_renders_with_a_page_url() {
        let with_url = InquiryEmail::new(&full_inquiry());
        assert!(with_url.html.contains("View page"));

        let without_url = InquiryEmail::new(&bare_inquiry());
        assert!(!without_url.html.contains("View page"));
    }
}
