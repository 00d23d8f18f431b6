//! Imported social network profile held for the length of a user session.

pub mod album_ids;
pub mod profile;

pub use profile::SocialProfile;
