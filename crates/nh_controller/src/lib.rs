pub mod controller;
pub mod state;

pub use controller::RetrievalController;
pub use state::RetrievalState;
