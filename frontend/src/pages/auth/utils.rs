use crate::api::{ApiError, AthletePayload, LoginRequest, RegisterRequest, Role};
use leptos::*;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Iniciar Sesión",
            AuthMode::Register => "Registro de Usuario",
        }
    }

    pub fn submit_label(self, pending: bool) -> &'static str {
        match (self, pending) {
            (AuthMode::Login, true) => "Cargando...",
            (AuthMode::Login, false) => "Iniciar Sesión",
            (AuthMode::Register, true) => "Registrando...",
            (AuthMode::Register, false) => "Registrarse",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub user: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            user: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let user = self.user.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&user, &password)?;
        Ok(LoginRequest { user, password })
    }

    pub fn prefill(&self, user: String) {
        self.user.set(user);
        self.password.set(String::new());
    }
}

/// Raw register inputs as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub nombre: String,
    pub apellido: String,
    pub user: String,
    pub contrasena: String,
    pub correo: String,
    pub rol: Role,
    pub altura: String,
    pub posicion: String,
    pub fecha_nacimiento: String,
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub nombre: RwSignal<String>,
    pub apellido: RwSignal<String>,
    pub user: RwSignal<String>,
    pub contrasena: RwSignal<String>,
    pub correo: RwSignal<String>,
    pub rol: RwSignal<Role>,
    pub altura: RwSignal<String>,
    pub posicion: RwSignal<String>,
    pub fecha_nacimiento: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            nombre: create_rw_signal(String::new()),
            apellido: create_rw_signal(String::new()),
            user: create_rw_signal(String::new()),
            contrasena: create_rw_signal(String::new()),
            correo: create_rw_signal(String::new()),
            rol: create_rw_signal(Role::Jugador),
            altura: create_rw_signal(String::new()),
            posicion: create_rw_signal(String::new()),
            fecha_nacimiento: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn snapshot(&self) -> RegisterForm {
        RegisterForm {
            nombre: self.nombre.get_untracked(),
            apellido: self.apellido.get_untracked(),
            user: self.user.get_untracked(),
            contrasena: self.contrasena.get_untracked(),
            correo: self.correo.get_untracked(),
            rol: self.rol.get_untracked(),
            altura: self.altura.get_untracked(),
            posicion: self.posicion.get_untracked(),
            fecha_nacimiento: self.fecha_nacimiento.get_untracked(),
        }
    }

    pub fn reset(&self) {
        for field in [
            self.nombre,
            self.apellido,
            self.user,
            self.contrasena,
            self.correo,
            self.altura,
            self.posicion,
            self.fecha_nacimiento,
        ] {
            field.set(String::new());
        }
        self.rol.set(Role::Jugador);
    }

    pub fn is_athlete(&self) -> bool {
        self.rol.get() == Role::Jugador
    }
}

pub fn validate_credentials(user: &str, password: &str) -> Result<(), ApiError> {
    if user.trim().is_empty() {
        return Err(ApiError::validation("Ingresa tu usuario"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Ingresa tu contraseña"));
    }
    Ok(())
}

/// Height in metres from the form text. Blank, zero or unparsable input is
/// sent as `null`.
pub fn parse_height(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h != 0.0)
}

fn missing_fields(form: &RegisterForm) -> Vec<&'static str> {
    [
        ("Nombre", &form.nombre),
        ("Apellido", &form.apellido),
        ("Usuario", &form.user),
        ("Contraseña", &form.contrasena),
        ("Correo electrónico", &form.correo),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
    .collect()
}

pub fn build_register_request(form: &RegisterForm) -> Result<RegisterRequest, ApiError> {
    let missing = missing_fields(form);
    if !missing.is_empty() {
        return Err(ApiError::validation("Completa los campos obligatorios")
            .with_details(json!({ "fields": missing })));
    }

    let athlete = (form.rol == Role::Jugador).then(|| AthletePayload {
        altura: parse_height(&form.altura),
        posicion: form.posicion.trim().to_string(),
        fecha_nacimiento: form.fecha_nacimiento.trim().to_string(),
    });

    Ok(RegisterRequest {
        nombre: form.nombre.trim().to_string(),
        apellido: form.apellido.trim().to_string(),
        user: form.user.trim().to_string(),
        contrasena: form.contrasena.clone(),
        rol: form.rol.clone(),
        correo: form.correo.trim().to_string(),
        athlete,
    })
}
