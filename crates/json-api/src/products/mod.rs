//! Products

mod errors;
pub(crate) mod handlers;
mod links;
mod messages;
mod requests;
mod responses;

pub(crate) use handlers::*;
