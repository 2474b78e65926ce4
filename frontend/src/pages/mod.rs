pub mod auth;
pub mod coach;
pub mod home;
pub mod profile;
pub mod reaction_test;
pub mod technician;
