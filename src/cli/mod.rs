//! Terminal front-end: interactive session, rate table and setup.

pub mod rates;
pub mod session;
pub mod setup;
pub mod ui;
