//! # Closing Policy Configuration
//!
//! Configuration for the register-closing rules.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIPU_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use kipu_core::Money;
use serde::{Deserialize, Serialize};

/// Register-closing policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigCaja {
    /// Maximum tolerated |descuadre| when closing. A closing whose
    /// discrepancy exceeds this is rejected with `DESCUADRE_EXCEDIDO`.
    pub margen_descuadre: Money,

    /// Whether a closing with any non-zero descuadre must carry an
    /// observación explaining it.
    pub requiere_observacion: bool,
}

impl Default for ConfigCaja {
    /// Defaults suitable for a small shop: tolerate up to S/ 1.00 of
    /// descuadre, no observación required.
    fn default() -> Self {
        ConfigCaja {
            margen_descuadre: Money::from_centimos(100),
            requiere_observacion: false,
        }
    }
}

impl ConfigCaja {
    /// Creates a ConfigCaja from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIPU_MARGEN_DESCUADRE`: margin in céntimos (e.g., "100")
    /// - `KIPU_REQUIERE_OBSERVACION`: "true" / "1" to require a note on
    ///   any unbalanced closing
    pub fn from_env() -> Self {
        let mut config = ConfigCaja::default();

        if let Ok(margen) = std::env::var("KIPU_MARGEN_DESCUADRE") {
            if let Ok(centimos) = margen.parse::<i64>() {
                if centimos >= 0 {
                    config.margen_descuadre = Money::from_centimos(centimos);
                }
            }
        }

        if let Ok(flag) = std::env::var("KIPU_REQUIERE_OBSERVACION") {
            config.requiere_observacion = matches!(flag.as_str(), "true" | "1");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margen() {
        let config = ConfigCaja::default();
        assert_eq!(config.margen_descuadre, Money::from_centimos(100));
        assert!(!config.requiere_observacion);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(ConfigCaja::default()).unwrap();
        assert_eq!(json["margenDescuadre"], 100);
        assert_eq!(json["requiereObservacion"], false);
    }
}
