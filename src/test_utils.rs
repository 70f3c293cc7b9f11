use crate::models::domain::User;
