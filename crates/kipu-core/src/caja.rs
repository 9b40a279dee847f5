//! # Cash Register Summary Engine
//!
//! Pure reconciliation math for a register session: given the declared
//! opening balances and the session's movement list, compute the running
//! totals per payment method and the overall saldo.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Register Reconciliation                             │
//! │                                                                         │
//! │  AperturaCaja ─────┐                                                    │
//! │                    ├──► calcular_resumen_caja ──► ResumenCaja           │
//! │  [Movimiento] ─────┘         (pure fold)            │                   │
//! │                                                     ▼                   │
//! │  monto contado ──► calcular_descuadre ──► descuadre (signed)            │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                    es_descuadre_valido(descuadre, margen)               │
//! │                    gates the register closing upstream                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - **Order independence**: the fold is plain summation, so permuting the
//!   movement list never changes the result.
//! - **Never fails**: no open register yields [`ResumenCaja::zero`], not an
//!   error. Margin violations are decided by callers, never raised here.

use crate::money::Money;
use crate::types::{AperturaCaja, MedioPago, Movimiento, ResumenCaja, TipoMovimiento};

// =============================================================================
// Summary Calculation
// =============================================================================

/// Computes the register summary from an opening record and a movement list.
///
/// ## Behavior
/// - `apertura = None` means no register session is open: returns the
///   all-zero summary with `cantidad_movimientos = 0`. This is a defined
///   result, not an error.
/// - Per-method totals (`efectivo`, `tarjeta`, `yape`) start at their
///   opening balance and fold each matching movement with its sign:
///   ingresos add, egresos subtract.
/// - `total_otros` starts at `monto_inicial_otros` and absorbs every
///   movement whose medio is NOT efectivo/tarjeta/yape. Plin,
///   transferencias, depósitos - and any payment method introduced later -
///   land here without this function changing.
///
/// ## Example
/// ```rust
/// use kipu_core::caja::calcular_resumen_caja;
/// use kipu_core::money::Money;
/// use kipu_core::types::{AperturaCaja, MedioPago, Movimiento, TipoMovimiento};
///
/// let apertura = AperturaCaja::nueva(
///     Money::from_centimos(100),
///     Money::from_centimos(50),
///     Money::from_centimos(20),
///     Money::zero(),
/// );
/// let movimientos = vec![
///     Movimiento::nuevo(TipoMovimiento::Ingreso, Money::from_centimos(30), MedioPago::Efectivo),
///     Movimiento::nuevo(TipoMovimiento::Egreso, Money::from_centimos(10), MedioPago::Tarjeta),
/// ];
///
/// let resumen = calcular_resumen_caja(Some(&apertura), &movimientos);
/// assert_eq!(resumen.saldo.centimos(), 190);
/// assert_eq!(resumen.total_efectivo.centimos(), 130);
/// assert_eq!(resumen.total_tarjeta.centimos(), 40);
/// ```
pub fn calcular_resumen_caja(
    apertura: Option<&AperturaCaja>,
    movimientos: &[Movimiento],
) -> ResumenCaja {
    let Some(apertura) = apertura else {
        // No open session: a zero summary tells the dashboard "nothing to
        // show" without forcing callers to special-case an error.
        return ResumenCaja::zero();
    };

    let mut ingresos = Money::zero();
    let mut egresos = Money::zero();
    let mut total_efectivo = apertura.monto_inicial_efectivo;
    let mut total_tarjeta = apertura.monto_inicial_tarjeta;
    let mut total_yape = apertura.monto_inicial_yape;
    let mut total_otros = apertura.monto_inicial_otros;

    for movimiento in movimientos {
        match movimiento.tipo {
            TipoMovimiento::Ingreso => ingresos += movimiento.monto,
            TipoMovimiento::Egreso => egresos += movimiento.monto,
        }

        let con_signo = movimiento.monto_con_signo();
        match movimiento.medio_pago {
            MedioPago::Efectivo => total_efectivo += con_signo,
            MedioPago::Tarjeta => total_tarjeta += con_signo,
            MedioPago::Yape => total_yape += con_signo,
            // Open-ended bucket: Plin, Transferencia, Deposito and any
            // future medio fall through here.
            _ => total_otros += con_signo,
        }
    }

    ResumenCaja {
        apertura: apertura.monto_inicial_total,
        ingresos,
        egresos,
        saldo: apertura.monto_inicial_total + ingresos - egresos,
        total_efectivo,
        total_tarjeta,
        total_yape,
        total_otros,
        cantidad_movimientos: movimientos.len(),
    }
}

// =============================================================================
// Auxiliary Calculations
// =============================================================================

/// Signed discrepancy between counted and expected cash.
///
/// Positive means a surplus (more money than expected), negative means a
/// shortage.
///
/// ## Example
/// ```rust
/// use kipu_core::caja::calcular_descuadre;
/// use kipu_core::money::Money;
///
/// let d = calcular_descuadre(Money::from_centimos(100), Money::from_centimos(95));
/// assert_eq!(d.centimos(), 5);
/// ```
#[inline]
pub fn calcular_descuadre(monto_ingresado: Money, saldo_esperado: Money) -> Money {
    monto_ingresado - saldo_esperado
}

/// Net balance of a period: ingresos minus egresos.
#[inline]
pub fn calcular_saldo_neto(ingresos: Money, egresos: Money) -> Money {
    ingresos - egresos
}

/// Total opening balance from its four components.
#[inline]
pub fn calcular_monto_inicial_total(
    efectivo: Money,
    tarjeta: Money,
    yape: Money,
    otros: Money,
) -> Money {
    efectivo + tarjeta + yape + otros
}

/// Whether a computed descuadre is within the allowed margin.
///
/// The comparison is on the absolute value: a shortage of S/ 0.50 and a
/// surplus of S/ 0.50 are equally acceptable. The summary engine never
/// raises the margin error itself; the session layer compares and decides.
///
/// ## Example
/// ```rust
/// use kipu_core::caja::es_descuadre_valido;
/// use kipu_core::money::Money;
///
/// assert!(es_descuadre_valido(Money::from_centimos(5), Money::from_centimos(10)));
/// assert!(!es_descuadre_valido(Money::from_centimos(5), Money::from_centimos(2)));
/// ```
#[inline]
pub fn es_descuadre_valido(descuadre: Money, margen: Money) -> bool {
    descuadre.abs() <= margen
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apertura_base() -> AperturaCaja {
        AperturaCaja::nueva(
            Money::from_centimos(100),
            Money::from_centimos(50),
            Money::from_centimos(20),
            Money::zero(),
        )
    }

    fn mov(tipo: TipoMovimiento, centimos: i64, medio: MedioPago) -> Movimiento {
        Movimiento::nuevo(tipo, Money::from_centimos(centimos), medio)
    }

    #[test]
    fn test_sin_apertura_resumen_en_cero() {
        let movimientos = vec![mov(TipoMovimiento::Ingreso, 9999, MedioPago::Efectivo)];
        let resumen = calcular_resumen_caja(None, &movimientos);

        assert_eq!(resumen, ResumenCaja::zero());
        assert_eq!(resumen.saldo.centimos(), 0);
        assert_eq!(resumen.cantidad_movimientos, 0);
    }

    #[test]
    fn test_resumen_con_movimientos() {
        let movimientos = vec![
            mov(TipoMovimiento::Ingreso, 30, MedioPago::Efectivo),
            mov(TipoMovimiento::Egreso, 10, MedioPago::Tarjeta),
        ];
        let resumen = calcular_resumen_caja(Some(&apertura_base()), &movimientos);

        assert_eq!(resumen.apertura.centimos(), 170);
        assert_eq!(resumen.ingresos.centimos(), 30);
        assert_eq!(resumen.egresos.centimos(), 10);
        assert_eq!(resumen.saldo.centimos(), 190);
        assert_eq!(resumen.total_efectivo.centimos(), 130);
        assert_eq!(resumen.total_tarjeta.centimos(), 40);
        assert_eq!(resumen.total_yape.centimos(), 20);
        assert_eq!(resumen.total_otros.centimos(), 0);
        assert_eq!(resumen.cantidad_movimientos, 2);
    }

    #[test]
    fn test_resumen_sin_movimientos() {
        let resumen = calcular_resumen_caja(Some(&apertura_base()), &[]);

        assert_eq!(resumen.saldo.centimos(), 170);
        assert_eq!(resumen.total_efectivo.centimos(), 100);
        assert_eq!(resumen.cantidad_movimientos, 0);
    }

    #[test]
    fn test_otros_absorbe_medios_no_principales() {
        let apertura = AperturaCaja::nueva(
            Money::zero(),
            Money::zero(),
            Money::zero(),
            Money::from_centimos(5),
        );
        let movimientos = vec![
            mov(TipoMovimiento::Ingreso, 100, MedioPago::Plin),
            mov(TipoMovimiento::Ingreso, 200, MedioPago::Transferencia),
            mov(TipoMovimiento::Egreso, 50, MedioPago::Deposito),
        ];
        let resumen = calcular_resumen_caja(Some(&apertura), &movimientos);

        assert_eq!(resumen.total_otros.centimos(), 5 + 100 + 200 - 50);
        assert!(resumen.total_efectivo.is_zero());
        assert!(resumen.total_tarjeta.is_zero());
        assert!(resumen.total_yape.is_zero());
    }

    #[test]
    fn test_egresos_pueden_dejar_totales_negativos() {
        // Taking out more than the opening cash is a data condition the
        // engine reports faithfully, not one it rejects.
        let apertura = AperturaCaja::solo_efectivo(Money::from_centimos(100));
        let movimientos = vec![mov(TipoMovimiento::Egreso, 150, MedioPago::Efectivo)];
        let resumen = calcular_resumen_caja(Some(&apertura), &movimientos);

        assert_eq!(resumen.total_efectivo.centimos(), -50);
        assert_eq!(resumen.saldo.centimos(), -50);
    }

    #[test]
    fn test_invariante_bajo_permutacion() {
        let movimientos = vec![
            mov(TipoMovimiento::Ingreso, 30, MedioPago::Efectivo),
            mov(TipoMovimiento::Egreso, 10, MedioPago::Tarjeta),
            mov(TipoMovimiento::Ingreso, 75, MedioPago::Yape),
            mov(TipoMovimiento::Egreso, 25, MedioPago::Plin),
            mov(TipoMovimiento::Ingreso, 40, MedioPago::Deposito),
        ];
        let apertura = apertura_base();
        let esperado = calcular_resumen_caja(Some(&apertura), &movimientos);

        // Reversed order
        let mut invertido = movimientos.clone();
        invertido.reverse();
        assert_eq!(calcular_resumen_caja(Some(&apertura), &invertido), esperado);

        // A handful of rotations
        for corte in 1..movimientos.len() {
            let mut rotado = movimientos.clone();
            rotado.rotate_left(corte);
            assert_eq!(calcular_resumen_caja(Some(&apertura), &rotado), esperado);
        }
    }

    #[test]
    fn test_calcular_descuadre() {
        assert_eq!(
            calcular_descuadre(Money::from_centimos(100), Money::from_centimos(95)).centimos(),
            5
        );
        assert_eq!(
            calcular_descuadre(Money::from_centimos(90), Money::from_centimos(95)).centimos(),
            -5
        );
    }

    #[test]
    fn test_calcular_saldo_neto() {
        let neto = calcular_saldo_neto(Money::from_centimos(300), Money::from_centimos(120));
        assert_eq!(neto.centimos(), 180);
    }

    #[test]
    fn test_calcular_monto_inicial_total() {
        let total = calcular_monto_inicial_total(
            Money::from_centimos(100),
            Money::from_centimos(50),
            Money::from_centimos(20),
            Money::zero(),
        );
        assert_eq!(total.centimos(), 170);
    }

    #[test]
    fn test_es_descuadre_valido() {
        assert!(es_descuadre_valido(
            Money::from_centimos(5),
            Money::from_centimos(10)
        ));
        assert!(!es_descuadre_valido(
            Money::from_centimos(5),
            Money::from_centimos(2)
        ));
        // Shortage counts the same as surplus
        assert!(es_descuadre_valido(
            Money::from_centimos(-10),
            Money::from_centimos(10)
        ));
        assert!(!es_descuadre_valido(
            Money::from_centimos(-11),
            Money::from_centimos(10)
        ));
        // Exactly on the margin is still valid
        assert!(es_descuadre_valido(
            Money::from_centimos(10),
            Money::from_centimos(10)
        ));
    }
}
