/*
* Health probe for load balancers and deploy monitoring.
*/

pub mod handler;
pub mod routes;

pub use routes::health_routes;
