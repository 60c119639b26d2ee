//! JSON-over-HTTP surface.
//!
//! | Method & path | Handler |
//! |---|---|
//! | `GET/POST /api/menu`, `PUT/DELETE /api/menu?id=` | menu management |
//! | `GET/POST /api/orders` | list orders, place an order |
//! | `GET/PUT /api/orders/:order_id` | read an order, change its status |
//! | `POST /api/my-orders` | a student's orders |
//! | `GET /api/analytics` | today's summary |
//! | `POST /api/auth/login` | admin credential check |

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::{AccountClient, MenuClient, OrderClient};
use crate::lifecycle::CanteenSystem;
use crate::placement::PlacementEngine;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuClient,
    pub orders: OrderClient,
    pub accounts: AccountClient,
    pub placement: PlacementEngine,
}

impl AppState {
    pub fn from_system(system: &CanteenSystem) -> Arc<Self> {
        Arc::new(Self {
            menu: system.menu.clone(),
            orders: system.orders.clone(),
            accounts: system.accounts.clone(),
            placement: system.placement.clone(),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/menu",
            get(handlers::list_menu)
                .post(handlers::create_menu_item)
                .put(handlers::update_menu_item)
                .delete(handlers::delete_menu_item),
        )
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::place_order),
        )
        .route(
            "/api/orders/:order_id",
            get(handlers::get_order).put(handlers::update_order_status),
        )
        .route("/api/my-orders", post(handlers::my_orders))
        .route("/api/analytics", get(handlers::analytics_today))
        .route("/api/auth/login", post(handlers::login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `0.0.0.0:port` until Ctrl+C or SIGTERM.
pub async fn serve(port: u16, router: Router) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
