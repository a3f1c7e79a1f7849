use serde::{Deserialize, Serialize};

/// Account type chosen at registration.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Employer,
    Company,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Employee, Role::Employer, Role::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Employer => "employer",
            Role::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Employer => "Employer",
            Role::Company => "Company",
        }
    }

    /// Maps a select value back to a role; unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "employer" => Role::Employer,
            "company" => Role::Company,
            _ => Role::Employee,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Token pair issued on a successful login.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Success body of a registration; the service decides its shape.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Structured failure body on a non-2xx response.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_exactly_email_and_password() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["email"], "a@b.com");
        assert_eq!(obj["password"], "x");
    }

    #[test]
    fn register_request_serializes_exactly_five_fields() {
        let req = RegisterRequest {
            email: "a@b.com".into(),
            password: "x".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: Role::default(),
        };
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["role"], "employee");
        assert_eq!(obj["first_name"], "Ada");
        assert_eq!(obj["last_name"], "Lovelace");
    }

    #[test]
    fn role_round_trips_as_lowercase_strings() {
        for role in Role::ALL {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, role.as_str());
            assert_eq!(Role::from_value(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_value_falls_back_to_employee() {
        assert_eq!(Role::from_value("admin"), Role::Employee);
        assert_eq!(Role::from_value(""), Role::Employee);
    }

    #[test]
    fn error_body_requires_the_error_field() {
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"detail":"no"}"#).is_err());

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.error, "Invalid credentials");
    }

    #[test]
    fn login_response_ignores_extra_server_fields() {
        let body: LoginResponse = serde_json::from_str(
            r#"{"message":"Login successful","access":"tok1","refresh":"tok2","user":{}}"#,
        )
        .unwrap();
        assert_eq!(body.access, "tok1");
        assert_eq!(body.refresh, "tok2");
    }
}
