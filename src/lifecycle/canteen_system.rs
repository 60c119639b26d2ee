use crate::account_actor::{self, AccountError};
use crate::clients::{AccountClient, MenuClient, OrderClient};
use crate::config::Config;
use crate::model::AccountCreate;
use crate::placement::PlacementEngine;
use crate::{menu_actor, order_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the canteen backend.
///
/// `CanteenSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the menu, order and account actors
/// - **Dependency Wiring**: handing the menu and order clients to the placement engine
/// - **Seeding**: registering the configured admin account
///
/// # Example
///
/// ```ignore
/// let system = CanteenSystem::start(&Config::default()).await?;
///
/// let item_id = system.menu.create_item(samosa).await?;
/// let order_id = system.placement.place_order(cart).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CanteenSystem {
    pub menu: MenuClient,
    pub orders: OrderClient,
    pub accounts: AccountClient,
    pub placement: PlacementEngine,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CanteenSystem {
    /// Spawns every actor and wires the clients together.
    ///
    /// Fails only if the configured admin account cannot be registered.
    pub async fn start(config: &Config) -> Result<Self, AccountError> {
        let (menu_actor, menu_client) = menu_actor::new(config.actor_buffer);
        let (order_actor, order_client) = order_actor::new(config.actor_buffer);
        let (account_actor, account_client) = account_actor::new(config.actor_buffer);

        let handles = vec![
            tokio::spawn(menu_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(account_actor.run()),
        ];

        let menu = MenuClient::new(menu_client);
        let orders = OrderClient::new(order_client);
        let accounts = AccountClient::new(account_client);
        let placement =
            PlacementEngine::new(menu.clone(), orders.clone(), config.enforce_total_price);

        if let Some(seed) = &config.admin {
            let id = accounts
                .register(AccountCreate {
                    email: seed.email.clone(),
                    password: seed.password.clone(),
                })
                .await?;
            info!(account_id = %id, email = %seed.email, "Seeded admin account");
        }

        info!(
            buffer = config.actor_buffer,
            enforce_total_price = config.enforce_total_price,
            "Canteen system started"
        );
        Ok(Self {
            menu,
            orders,
            accounts,
            placement,
            handles,
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels. Each actor drains what
    /// is already queued and exits. Clones handed out elsewhere (the HTTP state)
    /// must be dropped first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.placement);
        drop(self.menu);
        drop(self.orders);
        drop(self.accounts);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
