//! Request/response processing shared by every route.

pub mod logging;
