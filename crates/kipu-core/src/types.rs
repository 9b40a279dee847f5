//! # Domain Types
//!
//! Core domain types for the cash-register (caja) side of Kipu POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Movimiento    │   │  AperturaCaja   │   │  ResumenCaja    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  efectivo       │   │  ingresos       │       │
//! │  │  tipo           │   │  tarjeta        │   │  egresos        │       │
//! │  │  monto          │   │  yape           │   │  saldo          │       │
//! │  │  medio_pago     │   │  otros          │   │  total_* (x4)   │       │
//! │  └─────────────────┘   │  total          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ TipoMovimiento  │   │   MedioPago     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Ingreso        │   │  Efectivo       │                             │
//! │  │  Egreso         │   │  Tarjeta, Yape  │                             │
//! │  └─────────────────┘   │  Plin, Transf.. │                             │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! A `Movimiento` is an append-only record: created once by the POS flow
//! when cash enters or leaves the register, never mutated afterwards.
//! An `AperturaCaja` is declared once when the session opens.
//! A `ResumenCaja` is derived from scratch on every calculation and is
//! never persisted directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::caja::calcular_monto_inicial_total;
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// Payment method of a single cash movement.
///
/// Efectivo, Tarjeta and Yape each have their own running total in the
/// register summary. Everything else (Plin, Transferencia, Deposito, and
/// any method added in the future) is reported under "otros".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MedioPago {
    /// Physical cash.
    Efectivo,
    /// Card payment on an external terminal.
    Tarjeta,
    /// Yape digital wallet.
    Yape,
    /// Plin digital wallet.
    Plin,
    /// Bank transfer.
    Transferencia,
    /// Direct bank deposit.
    Deposito,
}

// =============================================================================
// Movement Type
// =============================================================================

/// Direction of a cash movement: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TipoMovimiento {
    /// Money entering the register (sales, extra cash added).
    Ingreso,
    /// Money leaving the register (expenses, withdrawals).
    Egreso,
}

impl TipoMovimiento {
    /// Sign applied when folding a movement into a per-method total:
    /// an ingreso adds, an egreso subtracts.
    #[inline]
    pub const fn signo(&self) -> i64 {
        match self {
            TipoMovimiento::Ingreso => 1,
            TipoMovimiento::Egreso => -1,
        }
    }
}

// =============================================================================
// Movement
// =============================================================================

/// A single cash event during a register session.
///
/// ## Design Notes
/// - Created by the POS flow, never mutated; the session owns an
///   append-only list of these.
/// - `concepto` is the free-text reason a cashier types for manual
///   ingresos/egresos; sales-generated movements usually leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Movimiento {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Whether this movement adds or removes money.
    pub tipo: TipoMovimiento,

    /// Amount moved (always non-negative; direction comes from `tipo`).
    pub monto: Money,

    /// How the money moved (cash, card, wallet, ...).
    pub medio_pago: MedioPago,

    /// Optional free-text reason.
    pub concepto: Option<String>,

    /// When the movement was recorded.
    #[ts(as = "String")]
    pub creado_en: DateTime<Utc>,
}

impl Movimiento {
    /// Creates a new movement with a fresh id and the current timestamp.
    pub fn nuevo(tipo: TipoMovimiento, monto: Money, medio_pago: MedioPago) -> Self {
        Movimiento {
            id: Uuid::new_v4().to_string(),
            tipo,
            monto,
            medio_pago,
            concepto: None,
            creado_en: Utc::now(),
        }
    }

    /// Creates a new movement with a free-text concepto attached.
    pub fn nuevo_con_concepto(
        tipo: TipoMovimiento,
        monto: Money,
        medio_pago: MedioPago,
        concepto: impl Into<String>,
    ) -> Self {
        Movimiento {
            concepto: Some(concepto.into()),
            ..Movimiento::nuevo(tipo, monto, medio_pago)
        }
    }

    /// The amount with its direction applied (ingreso positive, egreso negative).
    #[inline]
    pub fn monto_con_signo(&self) -> Money {
        self.monto * self.tipo.signo()
    }
}

// =============================================================================
// Register Opening
// =============================================================================

/// Opening balances declared when a register session starts.
///
/// ## Invariant
/// `monto_inicial_total == efectivo + tarjeta + yape + otros`.
/// The struct does NOT enforce this; use [`AperturaCaja::nueva`] which
/// computes the total, or take responsibility for it yourself when
/// constructing the record from stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AperturaCaja {
    /// Opening cash balance.
    pub monto_inicial_efectivo: Money,

    /// Opening card-terminal balance.
    pub monto_inicial_tarjeta: Money,

    /// Opening Yape wallet balance.
    pub monto_inicial_yape: Money,

    /// Opening balance for all other payment methods combined.
    pub monto_inicial_otros: Money,

    /// Sum of the four components above.
    pub monto_inicial_total: Money,
}

impl AperturaCaja {
    /// Creates an opening record, computing the total from its components.
    ///
    /// ## Example
    /// ```rust
    /// use kipu_core::money::Money;
    /// use kipu_core::types::AperturaCaja;
    ///
    /// let apertura = AperturaCaja::nueva(
    ///     Money::from_centimos(10000), // S/ 100 en efectivo
    ///     Money::from_centimos(5000),  // S/ 50 en tarjeta
    ///     Money::from_centimos(2000),  // S/ 20 en Yape
    ///     Money::zero(),
    /// );
    /// assert_eq!(apertura.monto_inicial_total.centimos(), 17000);
    /// ```
    pub fn nueva(efectivo: Money, tarjeta: Money, yape: Money, otros: Money) -> Self {
        AperturaCaja {
            monto_inicial_efectivo: efectivo,
            monto_inicial_tarjeta: tarjeta,
            monto_inicial_yape: yape,
            monto_inicial_otros: otros,
            monto_inicial_total: calcular_monto_inicial_total(efectivo, tarjeta, yape, otros),
        }
    }

    /// Opening with only cash declared (the common case for small shops).
    pub fn solo_efectivo(efectivo: Money) -> Self {
        AperturaCaja::nueva(efectivo, Money::zero(), Money::zero(), Money::zero())
    }
}

// =============================================================================
// Register Summary
// =============================================================================

/// Aggregated view of a register session: opening balance, totals per
/// payment method and overall saldo.
///
/// Derived, never persisted directly - recomputed from scratch on every
/// call to [`crate::caja::calcular_resumen_caja`]. A session that is not
/// open is represented by [`ResumenCaja::zero`], not by an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResumenCaja {
    /// Opening total (passthrough of `monto_inicial_total`).
    pub apertura: Money,

    /// Sum of all ingreso amounts.
    pub ingresos: Money,

    /// Sum of all egreso amounts.
    pub egresos: Money,

    /// `apertura + ingresos - egresos`.
    pub saldo: Money,

    /// Running cash total (opening cash plus signed cash movements).
    pub total_efectivo: Money,

    /// Running card total.
    pub total_tarjeta: Money,

    /// Running Yape total.
    pub total_yape: Money,

    /// Running total of every other payment method.
    pub total_otros: Money,

    /// Number of movements folded in, regardless of type.
    pub cantidad_movimientos: usize,
}

impl ResumenCaja {
    /// The all-zero summary returned when no register session is open.
    pub fn zero() -> Self {
        ResumenCaja {
            apertura: Money::zero(),
            ingresos: Money::zero(),
            egresos: Money::zero(),
            saldo: Money::zero(),
            total_efectivo: Money::zero(),
            total_tarjeta: Money::zero(),
            total_yape: Money::zero(),
            total_otros: Money::zero(),
            cantidad_movimientos: 0,
        }
    }
}

impl Default for ResumenCaja {
    fn default() -> Self {
        ResumenCaja::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apertura_nueva_computes_total() {
        let apertura = AperturaCaja::nueva(
            Money::from_centimos(100),
            Money::from_centimos(50),
            Money::from_centimos(20),
            Money::from_centimos(5),
        );
        assert_eq!(apertura.monto_inicial_total, Money::from_centimos(175));
    }

    #[test]
    fn test_apertura_solo_efectivo() {
        let apertura = AperturaCaja::solo_efectivo(Money::from_centimos(5000));
        assert_eq!(apertura.monto_inicial_efectivo, Money::from_centimos(5000));
        assert_eq!(apertura.monto_inicial_total, Money::from_centimos(5000));
        assert!(apertura.monto_inicial_tarjeta.is_zero());
    }

    #[test]
    fn test_movimiento_monto_con_signo() {
        let ingreso = Movimiento::nuevo(
            TipoMovimiento::Ingreso,
            Money::from_centimos(300),
            MedioPago::Efectivo,
        );
        let egreso = Movimiento::nuevo(
            TipoMovimiento::Egreso,
            Money::from_centimos(300),
            MedioPago::Efectivo,
        );
        assert_eq!(ingreso.monto_con_signo().centimos(), 300);
        assert_eq!(egreso.monto_con_signo().centimos(), -300);
    }

    #[test]
    fn test_movimiento_con_concepto() {
        let mov = Movimiento::nuevo_con_concepto(
            TipoMovimiento::Egreso,
            Money::from_centimos(1500),
            MedioPago::Efectivo,
            "Compra de bolsas",
        );
        assert_eq!(mov.concepto.as_deref(), Some("Compra de bolsas"));
        assert!(!mov.id.is_empty());
    }

    #[test]
    fn test_medio_pago_serde_values() {
        assert_eq!(
            serde_json::to_string(&MedioPago::Yape).unwrap(),
            "\"yape\""
        );
        assert_eq!(
            serde_json::to_string(&MedioPago::Transferencia).unwrap(),
            "\"transferencia\""
        );
        assert_eq!(
            serde_json::to_string(&TipoMovimiento::Ingreso).unwrap(),
            "\"ingreso\""
        );
    }

    #[test]
    fn test_resumen_zero() {
        let resumen = ResumenCaja::zero();
        assert!(resumen.saldo.is_zero());
        assert!(resumen.total_efectivo.is_zero());
        assert_eq!(resumen.cantidad_movimientos, 0);
        assert_eq!(resumen, ResumenCaja::default());
    }
}
