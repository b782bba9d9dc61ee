// Coding-practice submissions: verdict engine and HTTP handlers.
// All judge calls go through the `CodeExecutor` in AppState, never a concrete client.

pub mod engine;
pub mod handlers;
pub mod models;
