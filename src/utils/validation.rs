//! Utilidades de validación
//!
//! Validadores personalizados usados por los `#[derive(Validate)]` de los modelos.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Placa antigua (`ABC-1234`) o Mercosul (`ABC1D23`), guion opcional
    static ref LICENSE_PLATE_REGEX: Regex =
        Regex::new(r"^[A-Za-z]{3}-?[0-9][0-9A-Za-z][0-9]{2}$").unwrap();
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if !LICENSE_PLATE_REGEX.is_match(value.trim()) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ABC-1234 or ABC1D23".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC-1234").is_ok());
        assert!(validate_license_plate("abc1234").is_ok());
        assert!(validate_license_plate("ABC1D23").is_ok());
        assert!(validate_license_plate(" BRA2E19 ").is_ok());

        assert!(validate_license_plate("AB-1234").is_err());
        assert!(validate_license_plate("ABC-12345").is_err());
        assert!(validate_license_plate("ABCD123").is_err());
        assert!(validate_license_plate("").is_err());
    }
}
