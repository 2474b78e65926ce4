use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AuthPanel;

#[component]
pub fn AuthPage() -> impl IntoView {
    view! { <AuthPanel /> }
}
