use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    messaging::{
        catalog,
        renderer::{FieldMap, TemplateRenderer},
    },
    models::{order::OrderStatusData, template::MessageTemplate},
};

/// Turns an order's current status into the customer-facing WhatsApp text.
#[derive(Debug, Clone)]
pub struct OrderMessageGenerator {
    renderer: TemplateRenderer,
    site_origin: String,
}

impl OrderMessageGenerator {
    pub fn new(renderer: TemplateRenderer, site_origin: impl Into<String>) -> Self {
        Self {
            renderer,
            site_origin: site_origin.into(),
        }
    }

    pub fn generate(&self, order: &OrderStatusData) -> String {
        self.compose(order).1
    }

    /// Message text plus the catalog template it came from. The template is
    /// `None` when the status has no entry and the fallback line was used.
    pub fn compose(&self, order: &OrderStatusData) -> (Option<&'static MessageTemplate>, String) {
        let template_id = order.status.template_id();

        let Some(template) = catalog::find(&template_id) else {
            warn!(
                order_id = %order.order_id,
                status = %order.status,
                "No template for order status, using fallback"
            );
            return (None, fallback_message(order));
        };

        debug!(order_id = %order.order_id, template_id = %template.id, "Generating order status message");

        let message = self.renderer.fill(template, &self.order_fields(order));
        (Some(template), message)
    }

    pub fn tracking_link(&self, order_id: &str) -> String {
        format!(
            "{}/track-order?id={}",
            self.site_origin.trim_end_matches('/'),
            urlencoding::encode(order_id)
        )
    }

    fn order_fields(&self, order: &OrderStatusData) -> FieldMap {
        let mut fields: FieldMap = match serde_json::to_value(order) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            _ => FieldMap::new(),
        };

        let items = fields.get("items").cloned().unwrap_or(Value::Null);
        fields.insert("orderItems".to_string(), items);
        fields.insert("statusEmoji".to_string(), json!(order.status.emoji()));
        fields.insert("statusText".to_string(), json!(order.status.phrase()));
        fields.insert(
            "trackingLink".to_string(),
            json!(self.tracking_link(&order.order_id)),
        );

        fields
    }
}

pub fn fallback_message(order: &OrderStatusData) -> String {
    format!("Order #{} status: {}", order.order_id, order.status)
}
