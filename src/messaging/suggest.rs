//! Keyword rules that recommend a canned reply to an operator.
//!
//! Rules are checked in order and the first hit wins, so order tracking is
//! matched before menu questions and cakes before the general menu.

use tracing::debug;

use crate::{messaging::catalog, models::template::MessageTemplate};

struct SuggestionRule {
    matches: fn(&str) -> bool,
    template_id: &'static str,
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn asks_about_order(text: &str) -> bool {
    text.contains("order") && contains_any(text, &["status", "track", "where"])
}

fn asks_about_menu(text: &str) -> bool {
    contains_any(text, &["menu", "price", "available"])
}

fn asks_about_cakes(text: &str) -> bool {
    asks_about_menu(text) && text.contains("cake")
}

fn asks_about_delivery(text: &str) -> bool {
    contains_any(text, &["deliver", "location", "area"])
}

fn asks_about_hours(text: &str) -> bool {
    contains_any(text, &["hours", "open", "close", "time"])
}

fn asks_about_custom_order(text: &str) -> bool {
    contains_any(text, &["custom", "special", "design"])
}

fn needs_support(text: &str) -> bool {
    contains_any(text, &["help", "problem", "issue", "complaint"])
}

const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        matches: asks_about_order,
        template_id: "order_confirmed",
    },
    SuggestionRule {
        matches: asks_about_cakes,
        template_id: "menu_cakes",
    },
    SuggestionRule {
        matches: asks_about_menu,
        template_id: "menu_main_dishes",
    },
    SuggestionRule {
        matches: asks_about_delivery,
        template_id: "delivery_info",
    },
    SuggestionRule {
        matches: asks_about_hours,
        template_id: "business_hours",
    },
    SuggestionRule {
        matches: asks_about_custom_order,
        template_id: "custom_order",
    },
    SuggestionRule {
        matches: needs_support,
        template_id: "support_general",
    },
];

pub fn suggest_response(text: &str) -> Option<&'static MessageTemplate> {
    let lowered = text.to_lowercase();

    let suggestion = RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .and_then(|rule| catalog::find(rule.template_id));

    debug!(
        suggestion = suggestion.map(|t| t.id).unwrap_or("none"),
        "Auto-response suggestion evaluated"
    );

    suggestion
}
