// Per-user biography and client profile: limits, storage, autosave API.

pub mod handlers;
pub mod models;
pub mod store;
