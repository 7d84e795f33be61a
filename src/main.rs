use tracing::{error, info, Instrument};

use admin_records::app_system::{setup_tracing, AdminConfig, AdminSystem};
use admin_records::domain::{OrderCreate, OrderItemCreate, ProductCreate, UserCreate};
use admin_records::query::SearchParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AdminConfig::load()?;
    info!(?config, "Starting admin records");

    let system = AdminSystem::new(&config)?;

    let span = tracing::info_span!("user_screen");
    async {
        let page = system
            .user_client
            .list_users(&SearchParams::default().with_status("active"))
            .await?;
        info!(
            shown = page.items.len(),
            total = page.page_info.total,
            pages = page.page_info.total_pages,
            "Active users"
        );

        let form = UserCreate {
            username: "alice".into(),
            email: "alice@example.com".into(),
            real_name: "Alice".into(),
            phone: String::new(),
            role: "editor".into(),
            status: "active".into(),
        };
        let alice = system.user_client.create_user(form.clone()).await?;
        info!(user_id = alice.id, "Created user");

        // Same username again is a user-correctable failure, not a crash.
        match system.user_client.create_user(form).await {
            Ok(user) => error!(user_id = user.id, "Duplicate username was accepted"),
            Err(e) if e.is_user_correctable() => info!(error = %e, "Duplicate rejected"),
            Err(e) => return Err(e.into()),
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let product = system
        .product_client
        .create_product(ProductCreate {
            name: "Test Product".into(),
            sku: "SKU90001".into(),
            category: "电子产品".into(),
            price: 100.0,
            stock: 10,
            status: "active".into(),
            description: String::new(),
        })
        .await?;
    info!(product_id = product.id, "Product created successfully");

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let order = system
            .order_client
            .create_order(OrderCreate {
                customer_name: "Alice".into(),
                customer_email: "alice@example.com".into(),
                payment_method: "银行卡".into(),
                items: vec![OrderItemCreate {
                    product_name: product.name.clone(),
                    sku: product.sku.clone(),
                    quantity: 5,
                    price: product.price,
                }],
            })
            .await?;
        system.order_client.change_status(order.id, "paid").await?;
        system.order_client.cancel_order(order.id).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_no = %order.order_no, status = %order.status, "Order processed"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let stats = system.dashboard_client.stats().await?;
    info!(?stats, "Dashboard");

    let settings = system.settings_client.get_settings().await?;
    info!(site = %settings.values.site_name, currency = %settings.values.currency, "Settings loaded");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
