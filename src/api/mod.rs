// API routes and handlers

pub mod exercises;
pub mod extract;
pub mod health;
pub mod routes;
pub mod state;
pub mod users;


pub use routes::create_routes;
pub use state::AppState;
