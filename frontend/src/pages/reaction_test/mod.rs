pub mod game;

mod panel;

pub use panel::ReactionTestPage;
