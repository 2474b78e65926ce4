use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest},
    router::landing_route,
    utils::storage::SessionHandle,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
    store: SessionHandle,
}

impl AuthRepository {
    pub fn new_with_client(client: Rc<ApiClient>, store: SessionHandle) -> Self {
        Self { client, store }
    }

    /// Logs in, persists the returned identifier and picks the landing page
    /// from the user's role.
    pub async fn login(&self, request: LoginRequest) -> Result<&'static str, ApiError> {
        let response = self.client.login(&request).await?;
        self.store.set(&response.user_id).map_err(|err| {
            log::error!("No se pudo guardar la sesión: {}", err);
            ApiError::unknown("No se pudo guardar la sesión")
        })?;

        let role = match self.client.get_user(&response.user_id).await {
            Ok(user) => Some(user.rol),
            Err(err) => {
                log::warn!("Error al verificar el rol del usuario: {}", err);
                None
            }
        };
        Ok(landing_route(role.as_ref()))
    }

    /// Creates the account and returns the username to pre-fill the login form.
    pub async fn register(&self, request: RegisterRequest) -> Result<String, ApiError> {
        self.client.create_user(&request).await?;
        log::info!("Usuario {} registrado", request.user);
        Ok(request.user)
    }
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::api::{AthletePayload, Role, LOGIN_ERROR_MESSAGE};
    use crate::router::{HOME_PATH, TECHNICIAN_PATH};
    use crate::utils::storage::{MemorySessionStore, SessionStore};
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> (AuthRepository, SessionHandle) {
        let store = SessionHandle::new(MemorySessionStore::default());
        let client = Rc::new(ApiClient::new_with_base_url(server.base_url()));
        (AuthRepository::new_with_client(client, store.clone()), store)
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            user: "marta".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_stores_identifier_and_lands_by_role() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(json!({ "userId": "u-tec" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/usuarios/u-tec");
                then.status(200)
                    .json_body(json!({ "id": "u-tec", "rol": "tecnico" }));
            })
            .await;
        let (repo, store) = repository(&server);

        let target = repo.login(credentials()).await.unwrap();

        assert_eq!(target, TECHNICIAN_PATH);
        assert_eq!(store.get().as_deref(), Some("u-tec"));
    }

    #[tokio::test]
    async fn failed_role_lookup_lands_on_home() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(json!({ "userId": 31 }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/usuarios/31");
                then.status(500).body("down");
            })
            .await;
        let (repo, store) = repository(&server);

        assert_eq!(repo.login(credentials()).await.unwrap(), HOME_PATH);
        assert_eq!(store.get().as_deref(), Some("31"));
    }

    #[tokio::test]
    async fn rejected_login_stores_nothing() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({ "id": "x", "rol": "jugador" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(401)
                    .header("content-type", "application/json")
                    .json_body(json!({ "error": "bad credentials" }));
            })
            .await;
        let (repo, store) = repository(&server);

        let err = repo.login(credentials()).await.unwrap_err();

        assert_eq!(err.error, "bad credentials");
        assert!(store.get().is_none());
        lookup.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn rejected_login_without_message_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(400)
                    .header("content-type", "application/json")
                    .json_body(json!({ "message": "wrong field" }));
            })
            .await;
        let (repo, store) = repository(&server);

        let err = repo.login(credentials()).await.unwrap_err();

        assert_eq!(err.error, LOGIN_ERROR_MESSAGE);
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn register_returns_username_for_prefill() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/usuarios").json_body(json!({
                    "nombre": "Ana",
                    "apellido": "Ruiz",
                    "user": "ana",
                    "contrasena": "secreta",
                    "rol": "jugador",
                    "correo": "ana@example.com",
                    "altura": 1.82,
                    "posicion": "Base",
                    "fecha_nacimiento": "2001-04-03"
                }));
                then.status(201).json_body(json!({ "id": "u-new" }));
            })
            .await;
        let (repo, store) = repository(&server);
        let request = RegisterRequest {
            nombre: "Ana".into(),
            apellido: "Ruiz".into(),
            user: "ana".into(),
            contrasena: "secreta".into(),
            rol: Role::Jugador,
            correo: "ana@example.com".into(),
            athlete: Some(AthletePayload {
                altura: Some(1.82),
                posicion: "Base".into(),
                fecha_nacimiento: "2001-04-03".into(),
            }),
        };

        assert_eq!(repo.register(request).await.unwrap(), "ana");
        // Registration does not log the user in.
        assert!(store.get().is_none());
        mock.assert_hits_async(1).await;
    }
}
