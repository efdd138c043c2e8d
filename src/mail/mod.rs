//! SMTP mailer with templated rendering
//!
//! [`Mailer`] wraps a lettre SMTP transport and a tera template set. Mail
//! bodies are either passed in as ready-made HTML ([`Mailer::send_mail`])
//! or rendered from a named template with a context
//! ([`Mailer::send_template_mail`]).

use crate::config::MailerConfig;
use crate::core::error::{MailError, StoaResult};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use std::path::{Path, PathBuf};
use tera::Tera;

/// SMTP mailer bound to one sender identity and one template directory
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    templates: Tera,
    from_name: String,
    from_mail: String,
}

impl Mailer {
    /// Build the transport and load the templates from the configuration
    ///
    /// Templates are every `.html` file under the configured directory,
    /// addressed by file name in [`Mailer::send_template_mail`].
    pub fn new(config: &MailerConfig) -> StoaResult<Self> {
        let credentials = Credentials::new(
            config.smtp.username.clone(),
            config.smtp.password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp.host)
            .map_err(|e| MailError::Config {
                message: format!("invalid SMTP host '{}': {}", config.smtp.host, e),
            })?
            .credentials(credentials)
            .port(config.smtp.port)
            .build();

        let glob = format!("{}/**/*.html", config.template_dir.trim_end_matches('/'));
        let templates = Tera::new(&glob).map_err(|e| MailError::Template {
            template: glob.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            transport,
            templates,
            from_name: config.sender.from_name.clone(),
            from_mail: config.sender.from_mail.clone(),
        })
    }

    /// Render a named template (`{name}.html`) with the given context
    pub fn render(&self, template_name: &str, context: &tera::Context) -> StoaResult<String> {
        let file = format!("{}.html", template_name);
        let html = self
            .templates
            .render(&file, context)
            .map_err(|e| MailError::Template {
                template: template_name.to_string(),
                message: e.to_string(),
            })?;
        Ok(html)
    }

    /// Send an HTML mail, optionally with file attachments
    ///
    /// Returns whether the relay accepted the message for delivery.
    pub async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html: String,
        attachments: &[PathBuf],
    ) -> StoaResult<bool> {
        let from = self.sender_mailbox()?;
        let to_mailbox: Mailbox = to.parse().map_err(|e| MailError::Address {
            address: to.to_string(),
            message: format!("{}", e),
        })?;

        let mut body = MultiPart::mixed().singlepart(SinglePart::html(html));
        for path in attachments {
            body = body.singlepart(Self::attachment_part(path).await?);
        }

        let message = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .multipart(body)
            .map_err(|e| MailError::Config {
                message: format!("failed to build message: {}", e),
            })?;

        tracing::debug!(to, subject, "sending mail");
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport {
                message: e.to_string(),
            })?;

        Ok(response.is_positive())
    }

    /// Render a named template and send the result as an HTML mail
    pub async fn send_template_mail(
        &self,
        to: &str,
        subject: &str,
        template_name: &str,
        context: &tera::Context,
        attachments: &[PathBuf],
    ) -> StoaResult<bool> {
        let html = self.render(template_name, context)?;
        self.send_mail(to, subject, html, attachments).await
    }

    fn sender_mailbox(&self) -> Result<Mailbox, MailError> {
        let from = format!("\"{}\" <{}>", self.from_name, self.from_mail);
        from.parse().map_err(|e| MailError::Address {
            address: from.clone(),
            message: format!("{}", e),
        })
    }

    async fn attachment_part(path: &Path) -> Result<SinglePart, MailError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| MailError::Attachment {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();

        // Files are attached as opaque binary; the receiving client decides
        let content_type =
            ContentType::parse("application/octet-stream").map_err(|e| MailError::Attachment {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Attachment::new(filename).body(bytes, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::io::Write;

    fn mailer_with_templates(dir: &std::path::Path) -> Mailer {
        let mut config = AppConfig::default_config().mailing;
        config.template_dir = dir.to_str().unwrap().to_string();
        Mailer::new(&config).unwrap()
    }

    #[test]
    fn test_render_template() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("welcome.html")).unwrap();
        file.write_all(b"<p>Hallo {{ name }}!</p>").unwrap();

        let mailer = mailer_with_templates(dir.path());

        let mut context = tera::Context::new();
        context.insert("name", "Anna");
        let html = mailer.render("welcome", &context).unwrap();
        assert_eq!(html, "<p>Hallo Anna!</p>");
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = mailer_with_templates(dir.path());

        let err = mailer.render("missing", &tera::Context::new()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_fails_before_sending() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = mailer_with_templates(dir.path());

        let result = mailer
            .send_mail("keine-adresse", "Betreff", "<p>Inhalt</p>".to_string(), &[])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_attachment_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = mailer_with_templates(dir.path());

        let result = mailer
            .send_mail(
                "user@example.com",
                "Betreff",
                "<p>Inhalt</p>".to_string(),
                &[PathBuf::from("/nonexistent/report.pdf")],
            )
            .await;
        assert!(result.is_err());
    }
}
