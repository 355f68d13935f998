pub mod accounts;
pub mod feeds;
pub mod interactions;
pub mod password;

pub use accounts::AccountService;
pub use feeds::FeedService;
pub use interactions::InteractionService;
