use crate::api::UserRecord;
use crate::test_support::helpers::{provide_memory_session, provide_user};
use leptos::*;

/// Runs `f` inside a fresh reactive runtime that is disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let out = f();
    runtime.dispose();
    out
}

/// Server-renders `view` without starting any resource fetch.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a protected page as its guard would after resolving `user`.
pub fn render_as<F, N>(user: UserRecord, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_memory_session(Some(&user.id));
        provide_user(user);
        view()
    })
}
