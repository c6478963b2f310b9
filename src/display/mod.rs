//! Display client: fetches `/api/data` once and renders the JSON.

pub mod client;
pub mod view;
