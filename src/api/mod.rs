/*
* HTTP surface of the service: the deployment verification page,
* the health probe, and the unknown-route fallback.
*/

pub mod deployment;
pub mod fallback;
pub mod health;
