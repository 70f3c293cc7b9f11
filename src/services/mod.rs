pub mod match_service;
pub mod user_service;

pub use match_service::{MatchEngine, PersonaMatcher};
pub use user_service::UserService;
