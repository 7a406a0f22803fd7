/*
* Deployment verification page: a fixed HTML document that carries the
* active environment label and the time it was rendered.
*/

pub mod handler;
pub mod page;
pub mod routes;

pub use routes::deployment_routes;
