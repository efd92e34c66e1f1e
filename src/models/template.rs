use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    OrderStatus,
    MenuInquiry,
    Delivery,
    General,
    CustomOrder,
    Support,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::OrderStatus => "order_status",
            TemplateCategory::MenuInquiry => "menu_inquiry",
            TemplateCategory::Delivery => "delivery",
            TemplateCategory::General => "general",
            TemplateCategory::CustomOrder => "custom_order",
            TemplateCategory::Support => "support",
        }
    }
}

impl Display for TemplateCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A predefined WhatsApp message. The body holds `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub body: &'static str,
    pub category: TemplateCategory,
}
