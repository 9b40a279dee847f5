//! # Validation Module
//!
//! Input validation for the register flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session layer (kipu-caja)                                    │
//! │  └── THIS MODULE: amounts and free text checked before any             │
//! │      lifecycle transition runs                                         │
//! │                                                                         │
//! │  The pure calculators come AFTER this layer and assume nothing:        │
//! │  they normalize or zero out whatever still reaches them.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidacionError, ValidacionResult};
use crate::money::Money;
use crate::types::AperturaCaja;
use crate::MAX_OBSERVACION_LEN;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates that a monetary amount is not negative.
///
/// ## Example
/// ```rust
/// use kipu_core::money::Money;
/// use kipu_core::validation::validar_monto_no_negativo;
///
/// assert!(validar_monto_no_negativo("monto", Money::from_centimos(100)).is_ok());
/// assert!(validar_monto_no_negativo("monto", Money::from_centimos(-1)).is_err());
/// ```
pub fn validar_monto_no_negativo(campo: &str, monto: Money) -> ValidacionResult<()> {
    if monto.is_negative() {
        return Err(ValidacionError::MontoNegativo {
            campo: campo.to_string(),
        });
    }
    Ok(())
}

/// Validates the declared opening balances.
///
/// Each component must be non-negative. The total is NOT checked against
/// the components here: [`AperturaCaja::nueva`] computes it, and records
/// rebuilt from storage are the storage layer's responsibility.
pub fn validar_apertura(apertura: &AperturaCaja) -> ValidacionResult<()> {
    validar_monto_no_negativo("montoInicialEfectivo", apertura.monto_inicial_efectivo)?;
    validar_monto_no_negativo("montoInicialTarjeta", apertura.monto_inicial_tarjeta)?;
    validar_monto_no_negativo("montoInicialYape", apertura.monto_inicial_yape)?;
    validar_monto_no_negativo("montoInicialOtros", apertura.monto_inicial_otros)?;
    Ok(())
}

/// Validates a discrepancy margin (a tolerance can't be negative).
pub fn validar_margen(margen: Money) -> ValidacionResult<()> {
    validar_monto_no_negativo("margenDescuadre", margen)
}

// =============================================================================
// Text Validators
// =============================================================================

/// Validates the free-text observación attached to a register closing.
///
/// ## Rules
/// - May be empty (no observación)
/// - Maximum [`MAX_OBSERVACION_LEN`] characters after trimming
///
/// ## Returns
/// The trimmed text.
pub fn validar_observacion(observacion: &str) -> ValidacionResult<String> {
    let observacion = observacion.trim();

    if observacion.chars().count() > MAX_OBSERVACION_LEN {
        return Err(ValidacionError::MuyLargo {
            campo: "observacion".to_string(),
            max: MAX_OBSERVACION_LEN,
        });
    }

    Ok(observacion.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monto_no_negativo() {
        assert!(validar_monto_no_negativo("monto", Money::zero()).is_ok());
        assert!(validar_monto_no_negativo("monto", Money::from_centimos(1)).is_ok());

        let err = validar_monto_no_negativo("monto", Money::from_centimos(-1)).unwrap_err();
        assert_eq!(err.to_string(), "monto no puede ser negativo");
    }

    #[test]
    fn test_validar_apertura() {
        let valida = AperturaCaja::nueva(
            Money::from_centimos(10000),
            Money::zero(),
            Money::zero(),
            Money::zero(),
        );
        assert!(validar_apertura(&valida).is_ok());

        let invalida = AperturaCaja::nueva(
            Money::from_centimos(-100),
            Money::zero(),
            Money::zero(),
            Money::zero(),
        );
        let err = validar_apertura(&invalida).unwrap_err();
        assert!(matches!(err, ValidacionError::MontoNegativo { .. }));
    }

    #[test]
    fn test_validar_margen() {
        assert!(validar_margen(Money::zero()).is_ok());
        assert!(validar_margen(Money::from_centimos(-5)).is_err());
    }

    #[test]
    fn test_validar_observacion() {
        assert_eq!(
            validar_observacion("  caja cuadrada  ").unwrap(),
            "caja cuadrada"
        );
        assert_eq!(validar_observacion("").unwrap(), "");

        let larga = "x".repeat(MAX_OBSERVACION_LEN + 1);
        assert!(validar_observacion(&larga).is_err());

        let justa = "x".repeat(MAX_OBSERVACION_LEN);
        assert!(validar_observacion(&justa).is_ok());
    }
}
