//! # Register Session State
//!
//! Manages the current register session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<Option<SesionCaja>>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify it at a time
//! 3. The hosting command layer runs handlers concurrently
//!
//! `None` means "no register open" - a normal state, not an error, except
//! for operations that require an active session.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Operation                State Change         │
//! │  ───────────────          ─────────                ────────────         │
//! │                                                                         │
//! │  Declare opening ────────► abrir() ──────────────► Some(sesion)        │
//! │                                                                         │
//! │  Sale / expense ─────────► registrar_movimiento() ► movimientos.push   │
//! │                                                                         │
//! │  View dashboard ─────────► resumen() ────────────► (read only)         │
//! │                                                                         │
//! │  Count & close ──────────► cerrar() ─────────────► None (on success)   │
//! │                                                                         │
//! │  NOTE: cerrar() leaves the session OPEN when the descuadre exceeds      │
//! │        the margin, so the cashier can recount and retry.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use kipu_core::caja::{calcular_descuadre, calcular_resumen_caja, es_descuadre_valido};
use kipu_core::error::{CajaError, CajaResult, ValidacionError};
use kipu_core::types::{AperturaCaja, MedioPago, Movimiento, ResumenCaja, TipoMovimiento};
use kipu_core::validation::{validar_apertura, validar_monto_no_negativo, validar_observacion};
use kipu_core::Money;

use crate::config::ConfigCaja;

// =============================================================================
// Session
// =============================================================================

/// An open register session: the declared opening plus the append-only
/// movement list accumulated during the shift.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SesionCaja {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Opening balances declared by the cashier.
    pub apertura: AperturaCaja,

    /// Every cash event of the shift, in insertion order. Append-only:
    /// corrections are new movements, never edits.
    pub movimientos: Vec<Movimiento>,

    /// Who opened the register, if the host app tracks users.
    pub usuario: Option<String>,

    /// When the session was opened.
    #[ts(as = "String")]
    pub abierta_en: DateTime<Utc>,
}

impl SesionCaja {
    fn nueva(apertura: AperturaCaja, usuario: Option<String>) -> Self {
        SesionCaja {
            id: Uuid::new_v4().to_string(),
            apertura,
            movimientos: Vec::new(),
            usuario,
            abierta_en: Utc::now(),
        }
    }

    /// Current summary of this session. Recomputed from scratch; cheap
    /// for the movement counts a shift produces.
    pub fn resumen(&self) -> ResumenCaja {
        calcular_resumen_caja(Some(&self.apertura), &self.movimientos)
    }
}

// =============================================================================
// Closing Record
// =============================================================================

/// The outcome of a successful register closing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CierreCaja {
    /// The session that was closed.
    pub sesion_id: String,

    /// Final summary at the moment of closing.
    pub resumen: ResumenCaja,

    /// What the cashier actually counted.
    pub monto_contado: Money,

    /// `monto_contado - resumen.saldo`; positive is surplus, negative is
    /// shortage. Always within the configured margin (larger values are
    /// rejected before a CierreCaja exists).
    pub descuadre: Money,

    /// Optional note from the cashier.
    pub observacion: Option<String>,

    /// When the register was closed.
    #[ts(as = "String")]
    pub cerrada_en: DateTime<Utc>,
}

// =============================================================================
// Managed State
// =============================================================================

/// Thread-safe register state shared with the command layer.
///
/// ## Why Mutex and not RwLock?
/// Session operations are quick and most of them modify state; an RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CajaState {
    sesion: Arc<Mutex<Option<SesionCaja>>>,
    config: ConfigCaja,
}

impl CajaState {
    /// Creates a closed register with the given closing policy.
    pub fn new(config: ConfigCaja) -> Self {
        CajaState {
            sesion: Arc::new(Mutex::new(None)),
            config,
        }
    }

    /// The closing policy this register enforces.
    pub fn config(&self) -> &ConfigCaja {
        &self.config
    }

    /// Whether a session is currently open.
    pub fn esta_abierta(&self) -> bool {
        self.with_sesion(|sesion| sesion.is_some())
    }

    /// Opens a register session.
    ///
    /// ## Errors
    /// - `CAJA_YA_ABIERTA` if a session already exists
    /// - `VALIDACION` if any opening amount is negative
    pub fn abrir(&self, apertura: AperturaCaja, usuario: Option<String>) -> CajaResult<String> {
        validar_apertura(&apertura)?;

        self.with_sesion_mut(|slot| {
            if slot.is_some() {
                warn!("Intento de abrir caja con una sesión ya activa");
                return Err(CajaError::CajaYaAbierta);
            }

            let sesion = SesionCaja::nueva(apertura, usuario);
            info!(
                sesion_id = %sesion.id,
                monto_inicial = %sesion.apertura.monto_inicial_total,
                "Caja abierta"
            );
            let id = sesion.id.clone();
            *slot = Some(sesion);
            Ok(id)
        })
    }

    /// Records a cash movement in the open session.
    ///
    /// ## Errors
    /// - `CAJA_YA_CERRADA` if no session is open
    /// - `VALIDACION` if the amount is negative
    pub fn registrar_movimiento(
        &self,
        tipo: TipoMovimiento,
        monto: Money,
        medio_pago: MedioPago,
        concepto: Option<String>,
    ) -> CajaResult<String> {
        validar_monto_no_negativo("monto", monto)?;

        self.with_sesion_mut(|slot| {
            let sesion = slot.as_mut().ok_or(CajaError::CajaYaCerrada)?;

            let movimiento = match concepto {
                Some(concepto) => {
                    Movimiento::nuevo_con_concepto(tipo, monto, medio_pago, concepto)
                }
                None => Movimiento::nuevo(tipo, monto, medio_pago),
            };
            debug!(
                sesion_id = %sesion.id,
                movimiento_id = %movimiento.id,
                tipo = ?tipo,
                monto = %monto,
                medio = ?medio_pago,
                "Movimiento registrado"
            );
            let id = movimiento.id.clone();
            sesion.movimientos.push(movimiento);
            Ok(id)
        })
    }

    /// Summary of the current session, or the zero summary when closed.
    ///
    /// Closed is a normal dashboard state, so this never errors.
    pub fn resumen(&self) -> ResumenCaja {
        self.with_sesion(|sesion| match sesion {
            Some(sesion) => sesion.resumen(),
            None => calcular_resumen_caja(None, &[]),
        })
    }

    /// Closes the register against a counted amount.
    ///
    /// ## Errors
    /// - `CAJA_YA_CERRADA` if no session is open
    /// - `VALIDACION` if the counted amount is negative, the observación
    ///   is too long, or policy requires an observación and none was given
    /// - `DESCUADRE_EXCEDIDO` if |contado - esperado| exceeds the margin.
    ///   The session stays open so the cashier can recount and retry.
    pub fn cerrar(
        &self,
        monto_contado: Money,
        observacion: Option<&str>,
    ) -> CajaResult<CierreCaja> {
        validar_monto_no_negativo("montoContado", monto_contado)?;
        let observacion = match observacion {
            Some(texto) => {
                let texto = validar_observacion(texto)?;
                if texto.is_empty() {
                    None
                } else {
                    Some(texto)
                }
            }
            None => None,
        };

        self.with_sesion_mut(|slot| {
            let sesion = slot.as_ref().ok_or(CajaError::CajaYaCerrada)?;

            let resumen = sesion.resumen();
            let descuadre = calcular_descuadre(monto_contado, resumen.saldo);

            if !es_descuadre_valido(descuadre, self.config.margen_descuadre) {
                warn!(
                    sesion_id = %sesion.id,
                    descuadre = %descuadre,
                    margen = %self.config.margen_descuadre,
                    "Cierre rechazado por descuadre fuera de margen"
                );
                return Err(CajaError::DescuadreExcedido {
                    descuadre,
                    margen: self.config.margen_descuadre,
                });
            }

            if self.config.requiere_observacion && !descuadre.is_zero() && observacion.is_none() {
                return Err(CajaError::Validacion(ValidacionError::Requerido {
                    campo: "observacion".to_string(),
                }));
            }

            // Point of no return: consume the session
            let sesion = slot.take().expect("sesión verificada arriba");
            info!(
                sesion_id = %sesion.id,
                saldo_esperado = %resumen.saldo,
                monto_contado = %monto_contado,
                descuadre = %descuadre,
                "Caja cerrada"
            );

            Ok(CierreCaja {
                sesion_id: sesion.id,
                resumen,
                monto_contado,
                descuadre,
                observacion,
                cerrada_en: Utc::now(),
            })
        })
    }

    /// Executes a function with read access to the session slot.
    fn with_sesion<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Option<SesionCaja>) -> R,
    {
        let sesion = self.sesion.lock().expect("Mutex de sesión envenenado");
        f(&sesion)
    }

    /// Executes a function with write access to the session slot.
    fn with_sesion_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Option<SesionCaja>) -> R,
    {
        let mut sesion = self.sesion.lock().expect("Mutex de sesión envenenado");
        f(&mut sesion)
    }
}

impl Default for CajaState {
    fn default() -> Self {
        CajaState::new(ConfigCaja::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
