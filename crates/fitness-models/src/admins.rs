//! Administrator models.
//!
//! The stored password hash never leaves the persistence layer: [`Admin`] has
//! no password field.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Admin {
    pub id: i32,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(rename = "super")]
    pub is_super: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminDto {
    #[validate(length(min = 3, max = 64))]
    pub login: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[serde(default)]
    pub is_super: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedAdmin {
    pub id: i32,
}

/// Whether the calling admin is a super admin.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminTypeResponse {
    #[serde(rename = "type")]
    pub is_super: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateAdminDto {
        CreateAdminDto {
            login: "manager".to_string(),
            password: "secret1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            is_super: false,
        }
    }

    #[test]
    fn test_create_admin_dto_validation() {
        assert!(dto().validate().is_ok());

        let short_login = CreateAdminDto {
            login: "ab".to_string(),
            ..dto()
        };
        assert!(short_login.validate().is_err());

        let short_password = CreateAdminDto {
            password: "12345".to_string(),
            ..dto()
        };
        assert!(short_password.validate().is_err());

        let no_name = CreateAdminDto {
            first_name: "".to_string(),
            ..dto()
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_is_super_defaults_to_false() {
        let json = r#"{"login":"manager","password":"secret1","first_name":"A","last_name":"B"}"#;
        let dto: CreateAdminDto = serde_json::from_str(json).unwrap();
        assert!(!dto.is_super);
    }

    #[test]
    fn test_admin_type_wire_name() {
        let json = serde_json::to_string(&AdminTypeResponse { is_super: true }).unwrap();
        assert_eq!(json, r#"{"type":true}"#);
    }

    #[test]
    fn test_admin_serialization_has_no_password() {
        let admin = Admin {
            id: 1,
            login: "root".to_string(),
            first_name: "R".to_string(),
            last_name: "T".to_string(),
            is_super: true,
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("password"));
    }
}
