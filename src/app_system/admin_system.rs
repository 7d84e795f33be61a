use chrono::Utc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::actor_framework::{Entity, FrameworkError, IdSequence, ResourceActor, ResourceClient};
use crate::app_system::AdminConfig;
use crate::clients::{OrderClient, ProductClient, SettingsClient, UserClient};
use crate::dashboard::DashboardClient;
use crate::domain::{Order, Product, SystemSettings, User};
use crate::seed;

/// The main application system that owns the record stores.
///
/// Responsible for starting the store actors, seeding them, wiring the clients
/// together, and handling shutdown. Everything lives in process memory and is
/// gone once the system stops. The settings store always starts with its
/// single record, even when mock data is off.
pub struct AdminSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub settings_client: SettingsClient,
    pub dashboard_client: DashboardClient,
    handles: Vec<JoinHandle<()>>,
}

fn start_store<T: Entity>(
    buffer_size: usize,
    records: Vec<T>,
) -> Result<(ResourceClient<T>, JoinHandle<()>), FrameworkError> {
    let (mut actor, client) = ResourceActor::<T>::new(buffer_size, IdSequence::default());
    actor.seed(records)?;
    Ok((client, tokio::spawn(actor.run())))
}

impl AdminSystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &AdminConfig) -> Result<Self, FrameworkError> {
        info!(seed = config.seed_mock_data, "Starting admin system");
        let now = Utc::now();
        let (users, products, orders) = if config.seed_mock_data {
            (seed::mock_users(now), seed::mock_products(now), seed::mock_orders(now))
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        let (user_store, user_handle) = start_store::<User>(config.channel_buffer, users)?;
        let (product_store, product_handle) = start_store::<Product>(config.channel_buffer, products)?;
        let (order_store, order_handle) = start_store::<Order>(config.channel_buffer, orders)?;
        let (settings_store, settings_handle) =
            start_store::<SystemSettings>(config.channel_buffer, vec![SystemSettings::initial(now)])?;

        let user_client = UserClient::new(user_store, config.user_page_size);
        let product_client = ProductClient::new(product_store, config.product_page_size);
        let order_client = OrderClient::new(order_store, config.order_page_size);
        let settings_client = SettingsClient::new(settings_store);
        let dashboard_client = DashboardClient::new(
            user_client.clone(),
            product_client.clone(),
            order_client.clone(),
            config.low_stock_threshold,
            config.recent_limit,
        );

        Ok(Self {
            user_client,
            product_client,
            order_client,
            settings_client,
            dashboard_client,
            handles: vec![user_handle, product_handle, order_handle, settings_handle],
        })
    }

    /// Drops the system's clients and waits for the stores to stop.
    ///
    /// A store only stops once every clone of its client is gone, so callers
    /// must drop their own clones first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        let Self {
            user_client,
            product_client,
            order_client,
            settings_client,
            dashboard_client,
            handles,
        } = self;
        drop(dashboard_client);
        drop(settings_client);
        drop(order_client);
        drop(product_client);
        drop(user_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
