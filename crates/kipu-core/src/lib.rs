//! # kipu-core: Pure Business Logic for Kipu POS
//!
//! This crate is the **heart** of Kipu POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kipu POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    POS UI ──► Caja Dashboard ──► Inventory Alerts ──► Cierre   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (ts-rs generated types)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kipu-caja (session layer)                    │   │
//! │  │    abrir_caja, registrar_movimiento, cerrar_caja               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kipu-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   caja    │  │   stock   │  │   │
//! │  │   │ Movimiento│  │   Money   │  │  resumen  │  │  alertas  │  │   │
//! │  │   │ Apertura  │  │ céntimos  │  │ descuadre │  │ LOW/OK/.. │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Movimiento, AperturaCaja, ResumenCaja, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`caja`] - Cash-register summary and reconciliation math
//! - [`stock`] - Stock alert threshold evaluation
//! - [`error`] - Domain error taxonomy with stable codes
//! - [`validation`] - Input validation for the register flow
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in céntimos (i64) to avoid float errors
//! 4. **Never Fail on Data Absence**: a missing apertura yields a zero summary,
//!    unknown stock thresholds yield an OK classification - not errors
//!
//! ## Example Usage
//!
//! ```rust
//! use kipu_core::money::Money;
//! use kipu_core::caja::{calcular_descuadre, es_descuadre_valido};
//!
//! // The cashier counted S/ 101.00 but the register expected S/ 100.50
//! let contado = Money::from_centimos(10100);
//! let esperado = Money::from_centimos(10050);
//!
//! let descuadre = calcular_descuadre(contado, esperado);
//! assert_eq!(descuadre.centimos(), 50); // surplus of S/ 0.50
//!
//! // Within a configured margin of S/ 1.00
//! assert!(es_descuadre_valido(descuadre, Money::from_centimos(100)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod caja;
pub mod error;
pub mod money;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kipu_core::Money` instead of
// `use kipu_core::money::Money`

pub use caja::{
    calcular_descuadre, calcular_monto_inicial_total, calcular_resumen_caja, calcular_saldo_neto,
    es_descuadre_valido,
};
pub use error::{mensaje_de_error, CajaError, CajaResult, ErrorApi, ValidacionError};
pub use money::Money;
pub use stock::{
    evaluate_stock_alert, stock_alert_type, StockAlertEvaluation, StockAlertParams, StockAlertType,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a free-text observación attached to a register closing.
///
/// ## Business Reason
/// Keeps closing notes printable on a receipt and bounded in storage.
pub const MAX_OBSERVACION_LEN: usize = 500;

/// Fraction of the minimum threshold at or below which a LOW stock alert
/// is considered critical (e.g., mínimo 10 → critical at 5 or less).
pub const FACTOR_STOCK_CRITICO: f64 = 0.5;
