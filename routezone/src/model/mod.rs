pub mod evaluation;
pub mod route;
pub mod routing;
pub mod traffic;
pub mod zone;
