//! Placeholder image URL builders.
//!
//! Products in the fixture often lack real imagery; these helpers produce
//! via.placeholder.com URLs sized for each slot in the layout.

/// Build a placeholder image URL.
#[must_use]
pub fn placeholder_image(width: u32, height: u32, text: &str, bg_color: &str) -> String {
    format!(
        "https://via.placeholder.com/{width}x{height}/{bg_color}/666666?text={}",
        urlencoding::encode(text)
    )
}

/// Placeholder gallery for a product detail view.
#[must_use]
pub fn product_images(count: usize, product_name: &str) -> Vec<String> {
    (1..=count)
        .map(|i| placeholder_image(500, 600, &format!("{product_name} - View {i}"), "f0f0f0"))
        .collect()
}

/// Hero banner placeholder.
#[must_use]
pub fn hero_banner() -> String {
    placeholder_image(1200, 400, "Hero Banner", "e8e8e8")
}

/// Category tile placeholder.
#[must_use]
pub fn category_placeholder(category_name: &str) -> String {
    placeholder_image(300, 300, category_name, "f5f5f5")
}

/// Featured-section placeholder.
#[must_use]
pub fn featured_placeholder() -> String {
    placeholder_image(800, 500, "Featured Products", "f0f0f0")
}
