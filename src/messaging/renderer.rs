use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

use crate::models::{hours::BusinessHours, order::OrderItem, template::MessageTemplate};

/// Values supplied by the caller for one rendering, keyed by placeholder name.
pub type FieldMap = HashMap<String, Value>;

pub const TRACKING_LINK_FALLBACK: &str = "Contact us for tracking details";

// Innermost `{name}` only, so `{{name}}` fills the inner token.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

static LEFTOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("leftover pattern is valid"));

/// Fills `{name}` placeholders in template bodies.
///
/// Rendering never fails. Placeholders without a value are dropped, so the
/// output never carries a literal `{...}` token.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    hours: BusinessHours,
}

impl TemplateRenderer {
    pub fn new(hours: BusinessHours) -> Self {
        Self { hours }
    }

    pub fn fill(&self, template: &MessageTemplate, fields: &FieldMap) -> String {
        debug!(
            template_id = %template.id,
            field_count = fields.len(),
            "Rendering template"
        );

        self.fill_body(template.body, fields)
    }

    pub fn fill_body(&self, body: &str, fields: &FieldMap) -> String {
        self.fill_body_at(body, fields, self.hours.current_hour())
    }

    /// Renders `body` as if the kitchen's local clock read `hour`.
    pub fn fill_body_at(&self, body: &str, fields: &FieldMap, hour: u32) -> String {
        let substituted = PLACEHOLDER.replace_all(body, |caps: &Captures| {
            self.resolve(&caps[1], fields, hour).unwrap_or_default()
        });

        // Values may themselves contain braces; strip whatever survived.
        let cleaned = LEFTOVER.replace_all(&substituted, "");

        cleaned.trim().to_string()
    }

    fn resolve(&self, name: &str, fields: &FieldMap, hour: u32) -> Option<String> {
        match name {
            "orderItems" => fields.get(name).map(render_order_items),
            "currentStatus" if fields.contains_key("currentTime") => {
                Some(self.hours.status_at(hour).to_string())
            }
            "trackingLink" => Some(
                fields
                    .get(name)
                    .map(stringify)
                    .filter(|link| !link.is_empty())
                    .unwrap_or_else(|| TRACKING_LINK_FALLBACK.to_string()),
            ),
            _ => fields.get(name).map(stringify),
        }
    }
}

/// Renders line items as a numbered list, one `"n. name xqty - KSh total"` per line.
pub fn format_order_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}. {} x{} - KSh {}",
                index + 1,
                item.name,
                item.quantity,
                item.line_total()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_order_items(value: &Value) -> String {
    if value.is_null() {
        return String::new();
    }

    match serde_json::from_value::<Vec<OrderItem>>(value.clone()) {
        Ok(items) => format_order_items(&items),
        Err(e) => {
            debug!(error = %e, "orderItems is not a list of line items, dropping");
            String::new()
        }
    }
}

/// Converts a field value to message text. Falsy values become empty.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Array(values) => values
            .iter()
            .map(stringify)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::hours::{CLOSED_INDICATOR, OPEN_INDICATOR};

    fn fields(value: Value) -> FieldMap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(stringify(&json!(1500.0)), "1500");
        assert_eq!(stringify(&json!(12.5)), "12.5");
        assert_eq!(stringify(&json!(42)), "42");
    }

    #[test]
    fn falsy_values_render_empty() {
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(false)), "");
        assert_eq!(stringify(&json!(0)), "");
        assert_eq!(stringify(&json!("")), "");
    }

    #[test]
    fn order_items_render_as_numbered_lines() {
        let items = vec![
            OrderItem {
                name: "Pilau".to_string(),
                quantity: 2,
                price: 500.0,
            },
            OrderItem {
                name: "Mandazi".to_string(),
                quantity: 4,
                price: 12.5,
            },
        ];

        assert_eq!(
            format_order_items(&items),
            "1. Pilau x2 - KSh 1000\n2. Mandazi x4 - KSh 50"
        );
    }

    #[test]
    fn malformed_order_items_are_dropped() {
        let renderer = TemplateRenderer::default();
        let out = renderer.fill_body_at(
            "Items:\n{orderItems}",
            &fields(json!({ "orderItems": "not a list" })),
            12,
        );
        assert_eq!(out, "Items:");
    }

    #[test]
    fn current_status_follows_business_hours() {
        let renderer = TemplateRenderer::default();
        let map = fields(json!({ "currentTime": "9:00 AM" }));

        let open = renderer.fill_body_at("{currentTime} {currentStatus}", &map, 9);
        let closed = renderer.fill_body_at("{currentTime} {currentStatus}", &map, 23);

        assert_eq!(open, format!("9:00 AM {}", OPEN_INDICATOR));
        assert_eq!(closed, format!("9:00 AM {}", CLOSED_INDICATOR));
    }

    #[test]
    fn current_status_is_dropped_without_current_time() {
        let renderer = TemplateRenderer::default();
        let out = renderer.fill_body_at("Now: {currentStatus}", &FieldMap::new(), 9);
        assert_eq!(out, "Now:");
    }

    #[test]
    fn tracking_link_falls_back_when_missing_or_empty() {
        let renderer = TemplateRenderer::default();

        let missing = renderer.fill_body_at("Track: {trackingLink}", &FieldMap::new(), 9);
        let empty = renderer.fill_body_at(
            "Track: {trackingLink}",
            &fields(json!({ "trackingLink": "" })),
            9,
        );
        let given = renderer.fill_body_at(
            "Track: {trackingLink}",
            &fields(json!({ "trackingLink": "https://t.example/1" })),
            9,
        );

        assert_eq!(missing, format!("Track: {}", TRACKING_LINK_FALLBACK));
        assert_eq!(empty, missing);
        assert_eq!(given, "Track: https://t.example/1");
    }

    #[test]
    fn braces_inside_values_are_stripped() {
        let renderer = TemplateRenderer::default();
        let out = renderer.fill_body_at(
            "Hi {customerName}",
            &fields(json!({ "customerName": "Jane {nickname}" })),
            9,
        );
        assert_eq!(out, "Hi Jane");
    }

    #[test]
    fn doubled_braces_fill_the_inner_token() {
        let renderer = TemplateRenderer::default();
        let out = renderer.fill_body_at(
            "Hi {{customerName}}!",
            &fields(json!({ "customerName": "Jane" })),
            9,
        );
        assert_eq!(out, "Hi !");
    }
}
