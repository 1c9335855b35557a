// Ideal customer profile: prompt construction, generation, markdown rendering.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod markdown;
pub mod models;
pub mod prompts;
