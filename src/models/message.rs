use serde::{Deserialize, Serialize};

use crate::{messaging::renderer::FieldMap, models::order::OrderStatusData};

/// One newline-delimited request read by the worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub trace_id: Option<String>,
    pub data: MessageRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageRequest {
    /// Announce an order status the caller already holds.
    OrderStatus { order: OrderStatusData },

    /// Fetch the order from the tracking API, then announce its status.
    OrderLookup { order_id: String },

    /// Fill a catalog template directly.
    Template {
        template_id: String,
        #[serde(default)]
        fields: FieldMap,
        #[serde(default)]
        phone: Option<String>,
    },

    /// Recommend a canned reply for a customer's free-text message.
    Suggest { text: String },

    /// Open a chat with the kitchen's own number.
    Contact { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOutcome {
    pub trace_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MessageOutcome {
    pub fn new(trace_id: String) -> Self {
        Self {
            trace_id,
            template_id: None,
            message: None,
            link: None,
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }
}
