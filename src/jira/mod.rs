// Tracker client: wire types, the HTTP seam, and the identity + search fetch.

pub mod api;
pub mod fetch;
pub mod types;
