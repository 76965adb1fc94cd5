// variant-forms/examples/console_create.rs
// Drives the creation flow against a live admin API.

use variant_forms::{ClientConfig, CreateForm, VariantKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config =
        ClientConfig::from_env().unwrap_or_else(|| ClientConfig::new("http://localhost:8000"));
    tracing::info!(base_url = %config.base_url, "Connecting");

    let mut form = CreateForm::new(config.build_api());
    form.load_products().await?;

    let Some(product) = form.products().first().cloned() else {
        println!("No products available; create a product first.");
        return Ok(());
    };
    tracing::info!(product = %product.name, "Using first product");
    form.select_product(product.id);

    // One size variant with a single value
    form.editor.set_variant_kind(0, VariantKind::Size)?;
    form.editor.set_value(0, 0, "M")?;
    form.editor.set_price(0, 0, "19.99")?;
    form.editor.set_stock(0, 0, "5")?;

    match form.submit().await {
        Ok(message) => tracing::info!(%message, "Variants saved"),
        Err(e) => {
            if let Some(problems) = e.problems() {
                for problem in problems {
                    println!("- {problem}");
                }
            }
            tracing::error!(error = %e, "Submit failed");
        }
    }

    Ok(())
}
