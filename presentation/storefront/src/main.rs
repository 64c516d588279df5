use dotenvy::dotenv;

use business::domain::checkout::errors::CheckoutError;
use business::domain::product::use_cases::get_all::GetAllProductsParams;
use business::domain::shared::money::format_currency;
use storefront::config::app_config::AppConfig;
use storefront::setup::dependency_injection::DependencyContainer;
use storefront::setup::notifications::spawn_notice_logger;

const MAX_QUOTE_ATTEMPTS: usize = 3;

/// Storefront entry point
///
/// Wires the cart and checkout core, restores the persisted cart and
/// reports the catalog and the current checkout totals.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        tax_rate = %config.checkout.tax_rate,
        "configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Start observers before the first cart event
    let notices = spawn_notice_logger(container.cart_session.subscribe());
    let refresher = container.spawn_tax_refresher();

    // 6. Restore the persisted cart
    let outcome = container.restore_cart.execute().await?;
    if let Some(warning) = outcome.warning {
        tracing::warn!(error = %warning, "starting with an empty cart");
    }

    // 7. Report catalog and checkout state
    let products = container
        .get_all_products
        .execute(GetAllProductsParams::default())
        .await?;
    let featured = container.get_featured_products.execute().await?;
    tracing::info!(
        products = products.len(),
        featured = featured.len(),
        "catalog"
    );

    let summary = container.get_cart_summary.execute().await;
    for line in &summary.lines {
        tracing::info!(
            product = %line.product.title,
            quantity = line.quantity,
            line_total = %format_currency(line.line_total()),
            "cart line"
        );
    }
    tracing::info!(
        items = summary.item_count,
        subtotal = %format_currency(summary.subtotal),
        "cart"
    );

    if summary.item_count > 0 {
        // The refresher may already be pricing the restored cart.
        let mut result = container.calculate_tax.execute().await;
        for _ in 0..MAX_QUOTE_ATTEMPTS {
            if !matches!(result, Err(CheckoutError::Superseded)) {
                break;
            }
            result = container.calculate_tax.execute().await;
        }
        match result {
            Ok(quote) => tracing::info!(
                tax_rate = %container.checkout_session.tax_rate().await,
                sales_tax = %format_currency(quote.sales_tax),
                total = %format_currency(quote.total),
                "checkout total"
            ),
            Err(err) => tracing::warn!(error = %err, "checkout total unavailable"),
        }
    }

    refresher.abort();
    notices.abort();

    Ok(())
}
