//! Contact email body, in HTML and plain text.

use super::{Mailbox, OutgoingEmail};

const HEADING: &str = "You received the following message from the contact form";

pub fn compose(mailbox: &Mailbox, sender: &str, message: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: mailbox.from.clone(),
        to: vec![mailbox.to.clone()],
        subject: mailbox.subject.clone(),
        reply_to: sender.to_string(),
        html: render_html(sender, message),
        text: render_text(sender, message),
    }
}

fn render_text(sender: &str, message: &str) -> String {
    format!(
        "{}\n\n{}\n\n---\nThe sender's email is: {}\n",
        HEADING, message, sender
    )
}

fn render_html(sender: &str, message: &str) -> String {
    // Submitter text is untrusted; escape before it goes anywhere near markup
    let message = message
        .lines()
        .map(ammonia::clean_text)
        .collect::<Vec<_>>()
        .join("<br>");
    let sender = ammonia::clean_text(sender);

    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>New message from your portfolio site</title></head>",
            "<body style=\"background-color:#f3f4f6;color:#000;font-family:sans-serif\">",
            "<div style=\"background-color:#fff;border:1px solid #000;margin:40px auto;padding:32px 40px;max-width:600px;border-radius:6px\">",
            "<h1 style=\"font-size:20px;line-height:1.3\">{heading}</h1>",
            "<p>{message}</p>",
            "<hr>",
            "<p>The sender's email is: {sender}</p>",
            "</div></body></html>"
        ),
        heading = HEADING,
        message = message,
        sender = sender,
    )
}
