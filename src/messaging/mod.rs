pub mod catalog;
pub mod link;
pub mod order_status;
pub mod renderer;
pub mod suggest;

use anyhow::{Error, Result, anyhow};
use tracing::{info, warn};

use crate::{
    config::Config,
    messaging::{
        link::whatsapp_link,
        order_status::OrderMessageGenerator,
        renderer::{FieldMap, TemplateRenderer},
    },
    models::{
        message::MessageOutcome, order::OrderStatusData, template::MessageTemplate,
        validation::validate_phone,
    },
};

/// Everything the storefront needs to talk to customers over WhatsApp.
#[derive(Debug, Clone)]
pub struct Messenger {
    renderer: TemplateRenderer,
    generator: OrderMessageGenerator,
    business_phone: String,
}

impl Messenger {
    pub fn new(
        renderer: TemplateRenderer,
        site_origin: impl Into<String>,
        business_phone: impl Into<String>,
    ) -> Self {
        Self {
            generator: OrderMessageGenerator::new(renderer.clone(), site_origin),
            renderer,
            business_phone: business_phone.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            business_phone = %config.business_phone,
            site_origin = %config.site_origin,
            "Messenger initialized"
        );

        Self::new(
            TemplateRenderer::new(config.business_hours()),
            config.site_origin.clone(),
            config.business_phone.clone(),
        )
    }

    /// Status message for the customer plus a link that opens it in their chat.
    pub fn order_update(&self, order: &OrderStatusData, trace_id: String) -> MessageOutcome {
        let (template, message) = self.generator.compose(order);
        let link = self.customer_link(&order.customer_phone, &message);

        let outcome = MessageOutcome::new(trace_id);
        let outcome = match template {
            Some(template) => outcome.with_template(template.id),
            None => outcome,
        };

        outcome.with_message(message).with_link(link)
    }

    /// Renders a catalog template. Without a phone the link targets the kitchen.
    pub fn render(
        &self,
        template_id: &str,
        fields: &FieldMap,
        phone: Option<&str>,
        trace_id: String,
    ) -> Result<MessageOutcome, Error> {
        let template = catalog::find(template_id)
            .ok_or_else(|| anyhow!("Unknown template '{}'", template_id))?;

        let message = self.renderer.fill(template, fields);
        let link = match phone {
            Some(phone) => self.customer_link(phone, &message),
            None => self.contact_link(&message),
        };

        Ok(MessageOutcome::new(trace_id)
            .with_template(template.id)
            .with_message(message)
            .with_link(link))
    }

    pub fn suggest(&self, text: &str) -> Option<&'static MessageTemplate> {
        suggest::suggest_response(text)
    }

    pub fn contact_link(&self, message: &str) -> String {
        whatsapp_link(&self.business_phone, message)
    }

    fn customer_link(&self, phone: &str, message: &str) -> String {
        if let Err(e) = validate_phone(phone) {
            warn!(phone, error = %e, "Customer phone may not reach WhatsApp");
        }

        whatsapp_link(phone, message)
    }
}
