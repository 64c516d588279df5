use std::sync::Arc;

use tokio::task::JoinHandle;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryKeyValue;
use persistence::product::repository::StaticProductCatalog;
use persistence::store::{JsonFileStore, KeyValueStore};
use tax::LocalSalesTaxCalculator;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_summary::GetCartSummaryUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::restore::RestoreCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::checkout::calculate_tax::CalculateCheckoutTaxUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::checkout::refresh::TaxRefresher;
use business::application::checkout::set_tax_rate::SetTaxRateUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_featured::GetFeaturedProductsUseCaseImpl;
use business::domain::cart::session::CartSession;
use business::domain::cart::use_cases::add_item::AddCartItemUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use business::domain::cart::use_cases::remove_item::RemoveCartItemUseCase;
use business::domain::cart::use_cases::restore::RestoreCartUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateCartItemQuantityUseCase;
use business::domain::checkout::session::CheckoutSession;
use business::domain::checkout::use_cases::calculate_tax::CalculateCheckoutTaxUseCase;
use business::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use business::domain::checkout::use_cases::set_tax_rate::SetTaxRateUseCase;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::get_featured::GetFeaturedProductsUseCase;
use business::domain::tax::services::SalesTaxCalculator;

use crate::config::app_config::AppConfig;
use crate::config::checkout_config::CheckoutConfig;

pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub cart_session: Arc<CartSession>,
    pub checkout_session: Arc<CheckoutSession>,

    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_featured_products: Arc<dyn GetFeaturedProductsUseCase>,

    pub restore_cart: Arc<dyn RestoreCartUseCase>,
    pub add_cart_item: Arc<dyn AddCartItemUseCase>,
    pub remove_cart_item: Arc<dyn RemoveCartItemUseCase>,
    pub update_cart_item_quantity: Arc<dyn UpdateCartItemQuantityUseCase>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,
    pub get_cart_summary: Arc<dyn GetCartSummaryUseCase>,

    pub calculate_tax: Arc<dyn CalculateCheckoutTaxUseCase>,
    pub set_tax_rate: Arc<dyn SetTaxRateUseCase>,
    pub place_order: Arc<dyn PlaceOrderUseCase>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Arc::new(JsonFileStore::new(config.storage.data_dir.clone()));

        let catalog = match &config.catalog.path {
            Some(path) => StaticProductCatalog::from_json_file(path).await?,
            None => StaticProductCatalog::seeded(),
        };
        tracing::info!(products = catalog.len(), "product catalog ready");

        Ok(Self::with_adapters(
            store,
            Arc::new(catalog),
            Arc::new(LocalSalesTaxCalculator::new()),
            &config.checkout,
        ))
    }

    pub fn with_adapters(
        store: Arc<dyn KeyValueStore>,
        product_repository: Arc<dyn ProductRepository>,
        calculator: Arc<dyn SalesTaxCalculator>,
        checkout_config: &CheckoutConfig,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryKeyValue::new(store));

        // Shared state
        let cart_session = Arc::new(CartSession::new());
        let checkout_session = Arc::new(CheckoutSession::new(checkout_config.tax_rate));

        // Product use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_featured_products = Arc::new(GetFeaturedProductsUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let restore_cart = Arc::new(RestoreCartUseCaseImpl {
            repository: cart_repository.clone(),
            session: cart_session.clone(),
            logger: logger.clone(),
        });
        let add_cart_item = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            session: cart_session.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            session: cart_session.clone(),
            logger: logger.clone(),
        });
        let update_cart_item_quantity = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            session: cart_session.clone(),
            logger: logger.clone(),
        });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            session: cart_session.clone(),
            logger: logger.clone(),
        });
        let get_cart_summary = Arc::new(GetCartSummaryUseCaseImpl {
            session: cart_session.clone(),
        });

        // Checkout use cases
        let calculate_tax = Arc::new(CalculateCheckoutTaxUseCaseImpl {
            cart: cart_session.clone(),
            checkout: checkout_session.clone(),
            calculator,
            logger: logger.clone(),
        });
        let set_tax_rate = Arc::new(SetTaxRateUseCaseImpl {
            checkout: checkout_session.clone(),
            calculate: calculate_tax.clone(),
            logger: logger.clone(),
        });
        let place_order = Arc::new(PlaceOrderUseCaseImpl {
            cart: cart_session.clone(),
            checkout: checkout_session.clone(),
            clear_cart: clear_cart.clone(),
            processing_delay: checkout_config.order_delay,
            logger: logger.clone(),
        });

        Self {
            logger,
            cart_session,
            checkout_session,
            get_all_products,
            get_product_by_id,
            get_featured_products,
            restore_cart,
            add_cart_item,
            remove_cart_item,
            update_cart_item_quantity,
            clear_cart,
            get_cart_summary,
            calculate_tax,
            set_tax_rate,
            place_order,
        }
    }

    /// Keeps the checkout quote in step with the cart until aborted.
    pub fn spawn_tax_refresher(&self) -> JoinHandle<()> {
        TaxRefresher {
            calculate: self.calculate_tax.clone(),
            logger: self.logger.clone(),
        }
        .spawn(self.cart_session.subscribe())
    }
}
