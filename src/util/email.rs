use crate::config::{ConfigError, EmailConfig};
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Email message builder
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: String, subject: String) -> Self {
        Self {
            to,
            subject,
            text_body: None,
            html_body: None,
        }
    }

    pub fn with_text_body(mut self, body: String) -> Self {
        self.text_body = Some(body);
        self
    }

    pub fn with_html_body(mut self, body: String) -> Self {
        self.html_body = Some(body);
        self
    }
}

/// SMTP email service implementation
pub struct SmtpEmailService {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP email service");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;

            if config.use_starttls {
                transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
            } else {
                transport_builder = transport_builder.tls(Tls::Wrapper(tls_parameters));
            }
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if !config.smtp_username.is_empty() && !config.smtp_password.is_empty() {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            transport_builder = transport_builder.credentials(credentials);
        }

        let transport = transport_builder.build();

        info!("SMTP email service initialized successfully");
        Ok(Self { config, transport })
    }

    /// Send an email message
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    pub async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!("Sending email to: {}", message.to);

        let email_message = self.build_message(message)?;

        self.transport.send(email_message).await.map_err(|e| {
            error!("Failed to send email: {}", e);
            EmailError::SmtpError(format!("Failed to send email: {}", e))
        })?;

        info!("Email sent successfully");
        Ok(())
    }

    /// Send an order confirmation after a direct save or a quote conversion.
    #[instrument(skip(self), fields(to = %to, order_id = %order_id))]
    pub async fn send_order_confirmation(
        &self,
        to: &str,
        customer_name: &str,
        order_id: &str,
        model: &str,
        total_usd: f64,
        total_brl: f64,
    ) -> Result<(), EmailError> {
        let (text_body, html_body) =
            order_confirmation_template(customer_name, order_id, model, total_usd, total_brl);

        let message = EmailMessage::new(
            to.to_string(),
            format!("Order {} confirmed - Maresul Boats", order_id),
        )
        .with_text_body(text_body)
        .with_html_body(html_body);

        self.send_email(message).await
    }

    fn build_message(&self, message: EmailMessage) -> Result<Message, EmailError> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject);

        match (message.text_body, message.html_body) {
            (Some(text), Some(html)) => builder
                .multipart(MultiPart::alternative_plain_html(text, html))
                .map_err(|e| EmailError::MessageError(e.to_string())),
            (Some(text), None) => builder
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text),
                )
                .map_err(|e| EmailError::MessageError(e.to_string())),
            (None, Some(html)) => builder
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html),
                )
                .map_err(|e| EmailError::MessageError(e.to_string())),
            (None, None) => Err(EmailError::MessageError(
                "Email message has no body".to_string(),
            )),
        }
    }
}

fn order_confirmation_template(
    customer_name: &str,
    order_id: &str,
    model: &str,
    total_usd: f64,
    total_brl: f64,
) -> (String, String) {
    let text = format!(
        "Hello {customer_name},\n\n\
         Your order {order_id} for the {model} has been received.\n\
         Total: USD {total_usd:.2} / BRL {total_brl:.2}\n\n\
         Your dealer will contact you with delivery details.\n\n\
         Maresul Boats"
    );
    let html = format!(
        "<p>Hello {customer_name},</p>\
         <p>Your order <strong>{order_id}</strong> for the <strong>{model}</strong> has been received.</p>\
         <p>Total: USD {total_usd:.2} / BRL {total_brl:.2}</p>\
         <p>Your dealer will contact you with delivery details.</p>\
         <p>Maresul Boats</p>"
    );
    (text, html)
}
