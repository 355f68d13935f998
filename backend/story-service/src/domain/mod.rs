pub mod models;

pub use models::{
    LoginRequest, LoginResponse, NewStory, PublicProfile, RegisterRequest, RemovedUser,
    UpdateUserRequest, UserRecord,
};
