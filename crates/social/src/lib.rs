//! Relationship engine: friendship graph and film likes.
//!
//! Relations are stored as id sets embedded in the entities (`User::friends`,
//! `Film::likes`) and resolved to full entities only when read. The functions
//! here take the stores by reference; callers hold the dataset lock for the
//! duration of each call, which is what makes two-record updates atomic.

pub mod friends;
pub mod likes;

#[cfg(test)]
mod test_support;

pub use friends::{add_friend, common_friends, friends_of, remove_friend};
pub use likes::{add_like, popular, remove_like};
