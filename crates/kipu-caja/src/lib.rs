//! # kipu-caja: Register Session Lifecycle for Kipu POS
//!
//! Sits between the frontend-facing command layer and the pure math in
//! `kipu-core`. Owns exactly one piece of mutable state - the current
//! register session, if any - and enforces the lifecycle rules around it:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Register Session Lifecycle                          │
//! │                                                                         │
//! │            abrir(apertura)                cerrar(monto_contado)         │
//! │  ┌────────┐ ────────────────► ┌─────────┐ ────────────────► ┌────────┐ │
//! │  │ Closed │                   │  Open   │                   │ Closed │ │
//! │  └────────┘ ◄──── error ───── └─────────┘ ◄──── error ───── └────────┘ │
//! │    abrir on open: CAJA_YA_ABIERTA │                                     │
//! │    mutate when closed:            │ registrar_movimiento(...)           │
//! │      CAJA_YA_CERRADA              ▼ (append-only)                       │
//! │                              resumen() - derived, never stored          │
//! │                                                                         │
//! │  cerrar gates on |descuadre| <= margen: a violation returns             │
//! │  DESCUADRE_EXCEDIDO and leaves the session OPEN for a recount.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Closing policy (discrepancy margin, observación rules)
//! - [`sesion`] - `SesionCaja`, `CierreCaja` and the thread-safe `CajaState`

pub mod config;
pub mod sesion;

pub use config::ConfigCaja;
pub use sesion::{CajaState, CierreCaja, SesionCaja};
