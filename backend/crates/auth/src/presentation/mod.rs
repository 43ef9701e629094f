//! Presentation Layer
//!
//! HTTP handlers, DTOs and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic, users_router, users_router_generic};
