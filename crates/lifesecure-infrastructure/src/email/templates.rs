//! Fixed HTML templates for the two lead notification emails.

use lifesecure_core::domain::Customer;

pub const CONFIRMATION_SUBJECT: &str = "Thank you for your Life Insurance inquiry";
pub const ADMIN_ALERT_SUBJECT: &str = "New Lead Generated";

/// Confirmation sent to the submitter.
pub fn confirmation_email(customer: &Customer) -> (String, String) {
    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #1e40af;">Thank you for your interest in Life Insurance!</h2>
  <p>Dear {name},</p>
  <p>We have received your inquiry about life insurance. Our experienced insurance consultant will contact you shortly to discuss your requirements and help you find the perfect policy.</p>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #374151;">Your submitted details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Mobile:</strong> {mobile}</p>
    <p><strong>Date of Birth:</strong> {dob}</p>
  </div>
  <p>If you have any immediate questions, please don't hesitate to reach out to us.</p>
  <p>Best regards,<br>Life Insurance Team</p>
</div>"#,
        name = customer.name,
        email = customer.email,
        mobile = customer.mobile,
        dob = customer.dob,
    );
    (CONFIRMATION_SUBJECT.to_string(), body)
}

/// Alert sent to the admin inbox.
pub fn admin_alert_email(customer: &Customer) -> (String, String) {
    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #dc2626;">New Lead Generated!</h2>
  <p>A new customer has submitted a lead form on the website.</p>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #374151;">Customer Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Mobile:</strong> {mobile}</p>
    <p><strong>Date of Birth:</strong> {dob}</p>
    <p><strong>Submitted At:</strong> {submitted_at}</p>
  </div>
  <p>Please follow up with this lead promptly.</p>
</div>"#,
        name = customer.name,
        email = customer.email,
        mobile = customer.mobile,
        dob = customer.dob,
        submitted_at = customer.submitted_at.to_rfc3339(),
    );
    (ADMIN_ALERT_SUBJECT.to_string(), body)
}
