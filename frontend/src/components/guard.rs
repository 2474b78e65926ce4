use crate::{
    components::layout::{LoadingSpinner, SessionErrorBanner},
    state::session::{
        provide_current_user, resolve_session, use_api_client, use_session_store,
        RoleRequirement, SessionResolution,
    },
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardView {
    Loading,
    Hidden,
    Error,
    Content,
}

fn guard_view(resolution: Option<&SessionResolution>) -> GuardView {
    match resolution {
        None => GuardView::Loading,
        Some(SessionResolution::Redirect(_)) => GuardView::Hidden,
        Some(SessionResolution::Failed(_)) => GuardView::Error,
        Some(SessionResolution::Resolved(_)) => GuardView::Content,
    }
}

/// Resolves the session before rendering a protected page and exposes the
/// user to it through [`crate::state::session::use_current_user`].
#[component]
pub fn RequireSession(
    #[prop(optional)] requirement: RoleRequirement,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_session_store();
    let api = use_api_client();
    let resolution = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            let api = api.clone();
            let requirement = requirement.clone();
            async move { resolve_session(&*store, &api, &requirement).await }
        },
    );

    provide_current_user(Signal::derive(move || {
        resolution.get().and_then(|r| r.user().cloned())
    }));

    create_effect(move |_| {
        if let Some(SessionResolution::Redirect(target)) = resolution.get() {
            navigation::navigate_to(target);
        }
    });

    move || {
        let current = resolution.get();
        match (guard_view(current.as_ref()), current) {
            (GuardView::Content, _) => children().into_view(),
            (GuardView::Error, Some(SessionResolution::Failed(error))) => {
                view! { <SessionErrorBanner error=error/> }.into_view()
            }
            (GuardView::Loading, _) => view! { <LoadingSpinner/> }.into_view(),
            _ => ().into_view(),
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireSession;
    use crate::test_support::helpers::provide_memory_session;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_session_shows_spinner_until_resolved() {
        let html = render_to_string(move || {
            provide_memory_session(Some("u1"));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }
}
