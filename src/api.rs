pub mod cdn;
mod client;
mod error;
pub mod links;
mod model;
pub mod routes;

pub use client::ApiClient;
pub use error::{ApiClientError, EmptyTokenError};
pub use model::{
    Gateway, GatewayBot, Maintenance, MaintenanceWindow, ScheduledMaintenances, SessionStartLimit,
};
