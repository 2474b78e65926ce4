use leptos::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Jugador,
    Entrenador,
    Tecnico,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Jugador => "jugador",
            Role::Entrenador => "entrenador",
            Role::Tecnico => "tecnico",
            Role::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Jugador => "Jugador",
            Role::Entrenador => "Entrenador",
            Role::Tecnico => "Técnico",
            Role::Unknown(raw) => raw,
        }
    }

    /// Roles offered by the registration form, in display order.
    pub fn selectable() -> [Role; 3] {
        [Role::Jugador, Role::Entrenador, Role::Tecnico]
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Jugador
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "jugador" => Role::Jugador,
            "entrenador" => Role::Entrenador,
            "tecnico" => Role::Tecnico,
            other => Role::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "userId", deserialize_with = "string_or_number")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub user: String,
    pub contrasena: String,
    pub rol: Role,
    pub correo: String,
    #[serde(flatten)]
    pub athlete: Option<AthletePayload>,
}

/// Extra registration fields sent only for `jugador` accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthletePayload {
    pub altura: Option<f64>,
    pub posicion: String,
    pub fecha_nacimiento: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub correo: String,
    pub rol: Role,
    #[serde(default, deserialize_with = "optional_f64")]
    pub altura: Option<f64>,
    #[serde(default)]
    pub posicion: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AthleteProfile {
    pub altura: Option<f64>,
    pub posicion: Option<String>,
    pub fecha_nacimiento: Option<String>,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }

    /// Athlete fields, only for `jugador` records.
    pub fn athlete_profile(&self) -> Option<AthleteProfile> {
        if self.rol != Role::Jugador {
            return None;
        }
        Some(AthleteProfile {
            altura: self.altura,
            posicion: self.posicion.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
        })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number identifier, got {}",
            other
        ))),
    }
}

fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        Some(other) => Err(de::Error::custom(format!("expected number, got {}", other))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    RequestFailed,
    Rejected,
    ParseError,
    ValidationError,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RequestFailed => "REQUEST_FAILED",
            ErrorCode::Rejected => "REJECTED",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión con el servidor";
pub const PARSE_ERROR_MESSAGE: &str = "Error al procesar la respuesta del servidor";
pub const LOGIN_ERROR_MESSAGE: &str = "Error al iniciar sesión";
pub const REGISTER_ERROR_MESSAGE: &str = "Error al registrar usuario";
pub const USER_FETCH_ERROR_MESSAGE: &str = "No se pudo obtener la información del usuario";

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            error: msg.into(),
            code,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, ErrorCode::ValidationError)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, ErrorCode::Unknown)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, ErrorCode::RequestFailed)
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::with_code(msg, ErrorCode::Rejected)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::with_code(msg, ErrorCode::ParseError)
    }

    pub fn connection() -> Self {
        Self::request_failed(CONNECTION_ERROR_MESSAGE)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
