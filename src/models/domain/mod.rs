pub mod persona;
pub mod user;

pub use persona::Persona;
pub use user::User;
