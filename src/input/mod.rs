pub mod handler;
pub mod router;

pub use handler::InputHandler;
pub use router::InputRouter;
