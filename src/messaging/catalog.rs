use crate::models::template::{MessageTemplate, TemplateCategory};

pub const TEMPLATES: &[MessageTemplate] = &[
    MessageTemplate {
        id: "order_pending",
        name: "Order Received",
        body: "Hi {customerName}! 👋\n\n\
               We've received your order #{orderId} {statusEmoji}\n\n\
               📋 Order Details:\n{orderItems}\n\n\
               💰 Total: KSh {totalAmount}\n\n\
               We'll confirm it shortly. Thank you for choosing Sera's Kitchen! 🍽️",
        category: TemplateCategory::OrderStatus,
    },
    MessageTemplate {
        id: "order_confirmed",
        name: "Order Confirmed",
        body: "Hi {customerName}! 🎉\n\n\
               Your order #{orderId} has been confirmed {statusEmoji}\n\n\
               📋 Order Details:\n{orderItems}\n\n\
               💰 Total: KSh {totalAmount}\n\
               ⏰ Estimated time: {estimatedTime}\n\
               📍 Delivery to: {deliveryAddress}\n\n\
               Track your order: {trackingLink}\n\n\
               Thank you for choosing Sera's Kitchen! 🍽️",
        category: TemplateCategory::OrderStatus,
    },
    MessageTemplate {
        id: "order_preparing",
        name: "Order Being Prepared",
        body: "Hi {customerName}! {statusEmoji}\n\n\
               Great news! Your order #{orderId} is now being prepared by our chefs.\n\n\
               ⏰ Estimated time: {estimatedTime}\n\n\
               Track your order: {trackingLink}\n\n\
               We'll let you know as soon as it's on the way!",
        category: TemplateCategory::OrderStatus,
    },
    MessageTemplate {
        id: "order_out_for_delivery",
        name: "Order Out for Delivery",
        body: "Hi {customerName}! {statusEmoji}\n\n\
               Your order #{orderId} is out for delivery!\n\n\
               📍 Delivering to: {deliveryAddress}\n\
               ⏰ Arriving in: {estimatedTime}\n\n\
               Track your order: {trackingLink}\n\n\
               Please keep your phone nearby so our rider can reach you.",
        category: TemplateCategory::OrderStatus,
    },
    MessageTemplate {
        id: "order_delivered",
        name: "Order Delivered",
        body: "Hi {customerName}! {statusEmoji}\n\n\
               Your order #{orderId} has been delivered. Enjoy your meal! 😋\n\n\
               We'd love to hear what you think. Reply to this message with your feedback.\n\n\
               Thank you for choosing Sera's Kitchen! 🍽️",
        category: TemplateCategory::OrderStatus,
    },
    MessageTemplate {
        id: "menu_main_dishes",
        name: "Main Dishes Menu",
        body: "Hello {customerName}! 🍛\n\n\
               Here are today's main dishes at Sera's Kitchen:\n\n\
               • Pilau - KSh 500\n\
               • Biryani - KSh 650\n\
               • Chapati & Beef Stew - KSh 450\n\
               • Ugali & Sukuma with Nyama Choma - KSh 700\n\
               • Fish Fry with Coconut Rice - KSh 800\n\n\
               Reply with the dish name and quantity to order!",
        category: TemplateCategory::MenuInquiry,
    },
    MessageTemplate {
        id: "menu_cakes",
        name: "Cake Menu",
        body: "Hello {customerName}! 🎂\n\n\
               Our freshly baked cakes:\n\n\
               • Vanilla Sponge (1kg) - KSh 1,800\n\
               • Chocolate Fudge (1kg) - KSh 2,200\n\
               • Red Velvet (1kg) - KSh 2,500\n\
               • Black Forest (1kg) - KSh 2,300\n\n\
               Cakes need at least 24 hours notice. Reply to place your order!",
        category: TemplateCategory::MenuInquiry,
    },
    MessageTemplate {
        id: "delivery_info",
        name: "Delivery Information",
        body: "Hi {customerName}! 🚚\n\n\
               We deliver across Nairobi and its environs.\n\n\
               • CBD & Westlands - KSh 150\n\
               • Kilimani, Kileleshwa & Lavington - KSh 200\n\
               • Other areas - KSh 250 to 400\n\n\
               Delivery usually takes 30-60 minutes. Share your location and we'll confirm the fee!",
        category: TemplateCategory::Delivery,
    },
    MessageTemplate {
        id: "business_hours",
        name: "Business Hours",
        body: "🕐 Sera's Kitchen Business Hours\n\n\
               Monday - Sunday: 8:00 AM - 10:00 PM\n\n\
               Current time: {currentTime}\n\
               {currentStatus}\n\n\
               You can place orders anytime on our website!",
        category: TemplateCategory::General,
    },
    MessageTemplate {
        id: "welcome",
        name: "Welcome",
        body: "Hello {customerName}! 👋\n\n\
               Welcome to Sera's Kitchen, home of delicious homemade meals and cakes.\n\n\
               How can we help you today?\n\
               1️⃣ View menu\n\
               2️⃣ Track an order\n\
               3️⃣ Delivery information\n\
               4️⃣ Custom orders",
        category: TemplateCategory::General,
    },
    MessageTemplate {
        id: "custom_order",
        name: "Custom Order",
        body: "Hi {customerName}! ✨\n\n\
               We love making special orders! Please share:\n\n\
               • What you'd like (dish, cake design, theme)\n\
               • Number of people to serve\n\
               • Date and time needed\n\
               • Delivery location\n\
               • Your budget\n\n\
               Our team will get back to you with a quote within 2 hours.",
        category: TemplateCategory::CustomOrder,
    },
    MessageTemplate {
        id: "support_general",
        name: "Customer Support",
        body: "Hi {customerName}, we're sorry to hear you're having trouble. 🙏\n\n\
               Please describe the issue and include your order number if you have one.\n\n\
               A member of our team will respond as soon as possible. Thank you for your patience!",
        category: TemplateCategory::Support,
    },
];

pub fn all() -> &'static [MessageTemplate] {
    TEMPLATES
}

pub fn find(id: &str) -> Option<&'static MessageTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

pub fn by_category(
    category: TemplateCategory,
) -> impl Iterator<Item = &'static MessageTemplate> {
    TEMPLATES
        .iter()
        .filter(move |template| template.category == category)
}
