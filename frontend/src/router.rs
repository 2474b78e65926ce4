use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::RequireSession,
    pages::{
        auth::AuthPage, coach::CoachPage, home::HomePage, profile::ProfilePage,
        reaction_test::ReactionTestPage, technician::TechnicianPage,
    },
    state::session::{provide_session_store, RoleRequirement},
    utils::storage::SessionHandle,
};

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/inicio";
pub const COACH_PATH: &str = "/entrenador";
pub const TECHNICIAN_PATH: &str = "/tecnico";
pub const PROFILE_PATH: &str = "/profile";
pub const REACTION_TEST_PATH: &str = "/prueba-reaccion";

pub const ROUTE_PATHS: &[&str] = &[
    LOGIN_PATH,
    HOME_PATH,
    COACH_PATH,
    TECHNICIAN_PATH,
    PROFILE_PATH,
    REACTION_TEST_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[HOME_PATH, COACH_PATH, TECHNICIAN_PATH, PROFILE_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH, REACTION_TEST_PATH];

/// Role-based redirect for the page at `path`, if the viewer belongs elsewhere.
///
/// Paths are compared exactly. Combinations not listed below (for example a
/// technician on the coach dashboard, or an unknown role) never redirect here;
/// the dashboards' own role requirements handle them.
pub fn role_redirect(role: &Role, path: &str) -> Option<&'static str> {
    match (role, path) {
        (Role::Entrenador, HOME_PATH) => Some(COACH_PATH),
        (Role::Tecnico, HOME_PATH) => Some(TECHNICIAN_PATH),
        (Role::Jugador, COACH_PATH | TECHNICIAN_PATH) => Some(HOME_PATH),
        _ => None,
    }
}

/// Page a freshly logged-in user lands on. Without a known role, home.
pub fn landing_route(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Entrenador) => COACH_PATH,
        Some(Role::Tecnico) => TECHNICIAN_PATH,
        Some(Role::Jugador) | Some(Role::Unknown(_)) | None => HOME_PATH,
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_session_store(SessionHandle::local());
    view! {
        <Title text="ReactVolt"/>
        <Router>
            <Routes>
                <Route path=LOGIN_PATH view=AuthPage/>
                <Route path=HOME_PATH view=ProtectedHome/>
                <Route path=COACH_PATH view=ProtectedCoach/>
                <Route path=TECHNICIAN_PATH view=ProtectedTechnician/>
                <Route path=PROFILE_PATH view=ProtectedProfile/>
                <Route path=REACTION_TEST_PATH view=ReactionTestPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireSession><HomePage/></RequireSession> }
}

#[component]
fn ProtectedCoach() -> impl IntoView {
    view! {
        <RequireSession requirement=RoleRequirement::Exactly(Role::Entrenador)>
            <CoachPage/>
        </RequireSession>
    }
}

#[component]
fn ProtectedTechnician() -> impl IntoView {
    view! {
        <RequireSession requirement=RoleRequirement::Exactly(Role::Tecnico)>
            <TechnicianPage/>
        </RequireSession>
    }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireSession><ProfilePage/></RequireSession> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_roles() -> Vec<Role> {
        vec![
            Role::Jugador,
            Role::Entrenador,
            Role::Tecnico,
            Role::Unknown("arbitro".into()),
        ]
    }

    #[test]
    fn staff_on_home_are_sent_to_their_dashboard_once() {
        for (role, target) in [(Role::Entrenador, COACH_PATH), (Role::Tecnico, TECHNICIAN_PATH)] {
            assert_eq!(role_redirect(&role, HOME_PATH), Some(target));
            // Landing on the target must not bounce again.
            assert_eq!(role_redirect(&role, target), None);
        }
    }

    #[test]
    fn players_on_staff_dashboards_go_home() {
        assert_eq!(role_redirect(&Role::Jugador, COACH_PATH), Some(HOME_PATH));
        assert_eq!(role_redirect(&Role::Jugador, TECHNICIAN_PATH), Some(HOME_PATH));
        assert_eq!(role_redirect(&Role::Jugador, HOME_PATH), None);
    }

    #[test]
    fn players_elsewhere_are_not_redirected() {
        for path in [LOGIN_PATH, HOME_PATH, PROFILE_PATH, REACTION_TEST_PATH] {
            assert_eq!(role_redirect(&Role::Jugador, path), None, "path {}", path);
        }
    }

    #[test]
    fn uncovered_combinations_do_not_redirect() {
        assert_eq!(role_redirect(&Role::Tecnico, COACH_PATH), None);
        assert_eq!(role_redirect(&Role::Entrenador, TECHNICIAN_PATH), None);
        for path in ROUTE_PATHS {
            assert_eq!(role_redirect(&Role::Unknown("arbitro".into()), path), None);
        }
    }

    #[test]
    fn redirect_matching_is_exact() {
        assert_eq!(role_redirect(&Role::Tecnico, "/inicio/"), None);
        assert_eq!(role_redirect(&Role::Jugador, "/tecnico/extra"), None);
    }

    #[test]
    fn redirects_never_chain() {
        for role in all_roles() {
            for path in ROUTE_PATHS {
                if let Some(next) = role_redirect(&role, path) {
                    assert_eq!(role_redirect(&role, next), None, "{} from {}", role, path);
                }
            }
        }
    }

    #[test]
    fn landing_route_follows_role() {
        assert_eq!(landing_route(Some(&Role::Jugador)), HOME_PATH);
        assert_eq!(landing_route(Some(&Role::Entrenador)), COACH_PATH);
        assert_eq!(landing_route(Some(&Role::Tecnico)), TECHNICIAN_PATH);
        assert_eq!(landing_route(Some(&Role::Unknown("x".into()))), HOME_PATH);
        assert_eq!(landing_route(None), HOME_PATH);
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(PUBLIC_ROUTE_PATHS) {
            assert!(all.contains(path), "path missing from ROUTE_PATHS: {}", path);
        }
        assert_eq!(
            PROTECTED_ROUTE_PATHS.len() + PUBLIC_ROUTE_PATHS.len(),
            ROUTE_PATHS.len()
        );
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
