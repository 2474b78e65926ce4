#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role, UserRecord};
    use crate::state::session::{provide_current_user, provide_session_store};
    use crate::utils::storage::{MemorySessionStore, SessionHandle};
    use leptos::*;

    fn record(id: &str, nombre: &str, apellido: &str, user: &str, rol: Role) -> UserRecord {
        UserRecord {
            id: id.into(),
            nombre: nombre.into(),
            apellido: apellido.into(),
            user: user.into(),
            correo: format!("{}@example.com", user),
            rol,
            altura: None,
            posicion: None,
            fecha_nacimiento: None,
        }
    }

    pub fn player() -> UserRecord {
        UserRecord {
            altura: Some(1.82),
            posicion: Some("Base".into()),
            fecha_nacimiento: Some("2001-04-03".into()),
            ..record("u-player", "Ana", "Ruiz", "ana", Role::Jugador)
        }
    }

    pub fn technician() -> UserRecord {
        record("u-tec", "Marta", "León", "marta", Role::Tecnico)
    }

    pub fn coach() -> UserRecord {
        record("u-coach", "Luis", "Pardo", "luis", Role::Entrenador)
    }

    /// In-memory session plus an API client that never reaches a server.
    pub fn provide_memory_session(user_id: Option<&str>) -> SessionHandle {
        let store = match user_id {
            Some(id) => MemorySessionStore::with_user(id),
            None => MemorySessionStore::default(),
        };
        let handle = SessionHandle::new(store);
        provide_session_store(handle.clone());
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:1"));
        handle
    }

    /// Stands in for a page guard that already resolved `user`.
    pub fn provide_user(user: UserRecord) {
        provide_current_user(Signal::derive(move || Some(user.clone())));
    }
}
