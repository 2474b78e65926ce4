use crate::{
    api::{ApiClient, ApiError, Role, UserRecord},
    router::LOGIN_PATH,
    utils::{
        navigation,
        storage::{SessionHandle, SessionStore},
    },
};
use leptos::*;

/// Role a page demands from the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleRequirement {
    #[default]
    Any,
    Exactly(Role),
}

impl RoleRequirement {
    pub fn allows(&self, role: &Role) -> bool {
        match self {
            RoleRequirement::Any => true,
            RoleRequirement::Exactly(required) => required == role,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionResolution {
    Resolved(UserRecord),
    Redirect(&'static str),
    Failed(ApiError),
}

impl SessionResolution {
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            SessionResolution::Resolved(user) => Some(user),
            _ => None,
        }
    }
}

/// Works out who is looking at a protected page.
///
/// Without a stored identifier no request is made and the viewer is sent to
/// the login page. A role mismatch is a redirect as well, not an error.
pub async fn resolve_session(
    store: &dyn SessionStore,
    api: &ApiClient,
    requirement: &RoleRequirement,
) -> SessionResolution {
    let Some(user_id) = store.get() else {
        return SessionResolution::Redirect(LOGIN_PATH);
    };

    match api.get_user(&user_id).await {
        Ok(user) if requirement.allows(&user.rol) => SessionResolution::Resolved(user),
        Ok(user) => {
            log::info!("Role {} not allowed here, leaving page", user.rol);
            SessionResolution::Redirect(LOGIN_PATH)
        }
        Err(err) => {
            log::error!("Error al obtener datos del usuario: {}", err);
            SessionResolution::Failed(err)
        }
    }
}

/// Role of the stored user, if any. Failures are logged and swallowed.
pub async fn lookup_role(store: &dyn SessionStore, api: &ApiClient) -> Option<Role> {
    let user_id = store.get()?;
    match api.get_user(&user_id).await {
        Ok(user) => Some(user.rol),
        Err(err) => {
            log::warn!("Error al verificar el rol del usuario: {}", err);
            None
        }
    }
}

/// Forgets the session and returns where the viewer goes next.
pub fn logout(store: &dyn SessionStore) -> &'static str {
    store.clear();
    LOGIN_PATH
}

pub fn provide_session_store(handle: SessionHandle) {
    provide_context(handle);
}

pub fn use_session_store() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::local)
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

/// User resolved by the surrounding page guard.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub Signal<Option<UserRecord>>);

pub fn provide_current_user(user: Signal<Option<UserRecord>>) {
    provide_context(CurrentUser(user));
}

pub fn use_current_user() -> Option<Signal<Option<UserRecord>>> {
    use_context::<CurrentUser>().map(|current| current.0)
}

/// Logout callback for buttons: clears the session and leaves the page.
pub fn use_logout() -> Callback<()> {
    let store = use_session_store();
    Callback::new(move |_| {
        let target = logout(&*store);
        navigation::navigate_to(target);
    })
}
