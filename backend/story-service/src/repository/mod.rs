pub mod interactions;
pub mod stories;
pub mod users;

pub use interactions::InteractionRepository;
pub use stories::StoryRepository;
pub use users::UserRepository;
