/// Validation for the login and registration forms
///
/// Mirrors the checks the API applies, so most mistakes are caught before a
/// request is sent.

use stunting_common::types::{LoginRequest, RegisterRequest};

use crate::types::ValidationError;

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{} wajib diisi", field)));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    required("email", email)?;

    let invalid = || ValidationError::new("email", "Format email tidak valid");
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    if local_ok && host_ok && tld_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

pub fn validate_nama(nama: &str) -> Result<(), ValidationError> {
    required("nama", nama)?;

    if nama.chars().count() < 2 || !nama.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err(ValidationError::new(
            "nama",
            "Nama minimal 2 karakter dan hanya berisi huruf dan spasi",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("password", "password wajib diisi"));
    }

    if password.len() < 8 {
        return Err(ValidationError::new("password", "Password minimal 8 karakter"));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::new(
            "password",
            "Password harus berisi minimal satu huruf dan satu angka",
        ));
    }
    Ok(())
}

pub fn validate_alamat(alamat: &str) -> Result<(), ValidationError> {
    required("alamat", alamat)?;

    if alamat.len() < 5 {
        return Err(ValidationError::new("alamat", "Alamat minimal 5 karakter"));
    }
    Ok(())
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    required("email", &request.email)?;
    if request.password.is_empty() {
        return Err(ValidationError::new("password", "password wajib diisi"));
    }
    Ok(())
}

pub fn validate_register(request: &RegisterRequest) -> Result<(), ValidationError> {
    validate_email(&request.email)?;
    validate_nama(&request.nama)?;
    validate_password(&request.password)?;
    validate_alamat(&request.alamat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "siti@example.com".to_string(),
            nama: "Siti Aminah".to_string(),
            password: "rahasia123".to_string(),
            alamat: "Jl. Kesambi No. 4".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_register(&request()).is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("a.b+c@dinkes.cirebonkota.go.id").is_ok());
        assert_eq!(validate_email("").unwrap_err().field, "email");
        assert!(validate_email("siti@example").is_err());
        assert!(validate_email("siti@example.c").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("siti example@example.com").is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let mut req = request();
        req.nama = "S1ti".to_string();
        req.password = "short".to_string();
        assert_eq!(validate_register(&req).unwrap_err().field, "nama");

        let mut req = request();
        req.password = "onlyletters".to_string();
        assert_eq!(validate_register(&req).unwrap_err().field, "password");

        let mut req = request();
        req.alamat = "Jl.".to_string();
        assert_eq!(validate_register(&req).unwrap_err().field, "alamat");
    }

    #[test]
    fn test_login_only_requires_both_fields() {
        let ok = LoginRequest {
            email: "admin".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_login(&ok).is_ok());

        let missing = LoginRequest {
            email: "admin".to_string(),
            password: String::new(),
        };
        assert_eq!(validate_login(&missing).unwrap_err().field, "password");
    }
}
