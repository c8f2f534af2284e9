//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the demo service.
//! Each handler is responsible for processing one route and returning
//! either a JSON payload or a typed error for the global boundary.
//!
//! ## Available Handlers
//!
//! - **Root** (`root`) - Fixed service greeting
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Users** (`users`) - Synthesized user lookup
//! - **External** (`external`) - Outbound call to a third-party endpoint
//! - **Database** (`database`) - Simulated database query

mod database;
mod external;
mod health_check;
mod root;
mod users;

pub use database::*;
pub use external::*;
pub use health_check::*;
pub use root::*;
pub use users::*;
