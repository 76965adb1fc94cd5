// variant-forms/examples/catalog.rs
// Prints the product -> variant -> value catalog.

use variant_forms::{CatalogView, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config =
        ClientConfig::from_env().unwrap_or_else(|| ClientConfig::new("http://localhost:8000"));

    let mut view = CatalogView::new(config.build_api());
    view.load().await?;

    if view.is_empty() {
        println!("No products with variants available.");
        return Ok(());
    }

    for product in view.products() {
        println!("{} ({})", product.name, product.id);
        for variant in &product.variants {
            println!("  [{}]", variant.kind);
            for value in &variant.variant_values {
                let swatch = value
                    .swatch_hex()
                    .map(|hex| format!(" swatch={hex}"))
                    .unwrap_or_default();
                let image = if value.image.is_empty() {
                    String::new()
                } else {
                    format!(" image={}", view.image_url(&value.image))
                };
                println!(
                    "    {} - Price: ${} - Stock: {}{swatch}{image}",
                    value.value, value.price, value.stock
                );
            }
        }
    }

    Ok(())
}
