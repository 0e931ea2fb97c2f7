pub mod routes;
pub mod view_state;
