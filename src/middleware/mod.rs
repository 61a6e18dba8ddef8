//! Middleware layered on top of the router in [`crate::app::build_router`].

pub mod security_headers;
