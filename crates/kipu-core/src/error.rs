//! # Error Types
//!
//! Error taxonomy for the register-management flow.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kipu-core errors (this file)                                          │
//! │  ├── CajaError        - Register lifecycle failures                    │
//! │  └── ValidacionError  - Input validation failures                      │
//! │                                                                         │
//! │  Each CajaError carries a STABLE code string plus a localized          │
//! │  message. The frontend switches on the code; humans read the message.  │
//! │                                                                         │
//! │  Flow: ValidacionError → CajaError → ErrorApi → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pure calculators in [`crate::caja`] and [`crate::stock`] never
//! produce these errors - they normalize or zero out bad input. This
//! taxonomy belongs to the session layer that opens, mutates and closes
//! the register.

use serde::Serialize;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Caja Error
// =============================================================================

/// Register lifecycle errors.
///
/// These represent business rule violations in the open/close flow.
/// Codes are stable: the frontend and stored audit records depend on them.
#[derive(Debug, Error)]
pub enum CajaError {
    /// A backend call failed (network down, service unreachable).
    #[error("Error de red: {0}")]
    Red(String),

    /// Input validation failed (wraps ValidacionError).
    #[error("{0}")]
    Validacion(#[from] ValidacionError),

    /// The counted amount differs from the expected saldo by more than
    /// the configured margin. Carries both values so the UI can show
    /// "te faltan S/ X" and the allowed tolerance.
    #[error("El descuadre de {descuadre} supera el margen permitido de {margen}")]
    DescuadreExcedido { descuadre: Money, margen: Money },

    /// Operation requires an open register but none exists.
    #[error("No hay una caja abierta")]
    CajaYaCerrada,

    /// Opening was attempted while a session is already active.
    #[error("Ya existe una caja abierta. Ciérrela primero")]
    CajaYaAbierta,
}

impl CajaError {
    /// Stable machine-readable code for this error.
    ///
    /// These strings are part of the API contract with the frontend;
    /// renaming a variant must not change its code.
    pub const fn codigo(&self) -> &'static str {
        match self {
            CajaError::Red(_) => "RED",
            CajaError::Validacion(_) => "VALIDACION",
            CajaError::DescuadreExcedido { .. } => "DESCUADRE_EXCEDIDO",
            CajaError::CajaYaCerrada => "CAJA_YA_CERRADA",
            CajaError::CajaYaAbierta => "CAJA_YA_ABIERTA",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before the lifecycle logic runs.
#[derive(Debug, Error)]
pub enum ValidacionError {
    /// A required field is missing or empty.
    #[error("{campo} es obligatorio")]
    Requerido { campo: String },

    /// A monetary amount that must be >= 0 came in negative.
    #[error("{campo} no puede ser negativo")]
    MontoNegativo { campo: String },

    /// Field value is too long.
    #[error("{campo} no puede superar {max} caracteres")]
    MuyLargo { campo: String, max: usize },

    /// Numeric value is out of range.
    #[error("{campo} debe estar entre {min} y {max}")]
    FueraDeRango { campo: String, min: i64, max: i64 },
}

// =============================================================================
// Frontend-Facing Shape
// =============================================================================

/// Serialized error shape the frontend receives.
///
/// ```json
/// { "codigo": "DESCUADRE_EXCEDIDO", "mensaje": "El descuadre de ..." }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorApi {
    /// Machine-readable code for programmatic handling.
    pub codigo: &'static str,

    /// Human-readable message for display.
    pub mensaje: String,
}

impl From<&CajaError> for ErrorApi {
    fn from(err: &CajaError) -> Self {
        ErrorApi {
            codigo: err.codigo(),
            mensaje: err.to_string(),
        }
    }
}

// =============================================================================
// Display Dispatcher
// =============================================================================

/// Fallback message for error shapes this module doesn't recognize.
pub const MENSAJE_ERROR_GENERICO: &str = "Ocurrió un error inesperado";

/// Maps any error value to the string a user should see.
///
/// Known register errors render their own localized message; anything
/// else (I/O errors bubbling up from a backend client, panics converted
/// to errors, ...) collapses to the generic message rather than leaking
/// internals to the screen.
pub fn mensaje_de_error(err: &(dyn std::error::Error + 'static)) -> String {
    if let Some(caja) = err.downcast_ref::<CajaError>() {
        return caja.to_string();
    }
    if let Some(validacion) = err.downcast_ref::<ValidacionError>() {
        return validacion.to_string();
    }
    MENSAJE_ERROR_GENERICO.to_string()
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CajaError.
pub type CajaResult<T> = Result<T, CajaError>;

/// Convenience type alias for validation results.
pub type ValidacionResult<T> = Result<T, ValidacionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigos_estables() {
        assert_eq!(CajaError::Red("timeout".into()).codigo(), "RED");
        assert_eq!(CajaError::CajaYaAbierta.codigo(), "CAJA_YA_ABIERTA");
        assert_eq!(CajaError::CajaYaCerrada.codigo(), "CAJA_YA_CERRADA");
        assert_eq!(
            CajaError::DescuadreExcedido {
                descuadre: Money::from_centimos(500),
                margen: Money::from_centimos(100),
            }
            .codigo(),
            "DESCUADRE_EXCEDIDO"
        );
        let validacion: CajaError = ValidacionError::Requerido {
            campo: "monto".into(),
        }
        .into();
        assert_eq!(validacion.codigo(), "VALIDACION");
    }

    #[test]
    fn test_mensaje_descuadre_incluye_montos() {
        let err = CajaError::DescuadreExcedido {
            descuadre: Money::from_centimos(-550),
            margen: Money::from_centimos(100),
        };
        assert_eq!(
            err.to_string(),
            "El descuadre de -S/ 5.50 supera el margen permitido de S/ 1.00"
        );
    }

    #[test]
    fn test_validacion_se_convierte_en_caja_error() {
        let err: CajaError = ValidacionError::MontoNegativo {
            campo: "montoInicialEfectivo".into(),
        }
        .into();
        assert!(matches!(err, CajaError::Validacion(_)));
        assert_eq!(err.to_string(), "montoInicialEfectivo no puede ser negativo");
    }

    #[test]
    fn test_dispatcher_conoce_errores_de_caja() {
        let err = CajaError::CajaYaAbierta;
        assert_eq!(
            mensaje_de_error(&err),
            "Ya existe una caja abierta. Ciérrela primero"
        );

        let validacion = ValidacionError::Requerido {
            campo: "apertura".into(),
        };
        assert_eq!(mensaje_de_error(&validacion), "apertura es obligatorio");
    }

    #[test]
    fn test_dispatcher_cae_al_generico() {
        let ajeno = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(mensaje_de_error(&ajeno), MENSAJE_ERROR_GENERICO);
    }

    #[test]
    fn test_error_api_serializa_codigo_y_mensaje() {
        let err = CajaError::CajaYaCerrada;
        let api = ErrorApi::from(&err);
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["codigo"], "CAJA_YA_CERRADA");
        assert_eq!(json["mensaje"], "No hay una caja abierta");
    }
}
