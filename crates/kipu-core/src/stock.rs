//! # Stock Alert Evaluator
//!
//! Classifies the available quantity of a product against its configured
//! reorder thresholds, for the inventory alert badges and reorder workflow.
//!
//! Quantities are `f64` because products sold by weight have fractional
//! stock. Invalid input never fails: non-finite numbers, negative
//! quantities and unset thresholds all degrade to safe defaults.
//!
//! ## Threshold semantics
//! A threshold that is absent, non-finite, negative or exactly zero is
//! treated as **not configured**. Zero meaning "no threshold" (rather than
//! "a threshold of zero") is a deliberate rule carried over from how the
//! product catalog stores unset limits.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::FACTOR_STOCK_CRITICO;

// =============================================================================
// Types
// =============================================================================

/// Classification of a product's stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockAlertType {
    /// At or below the configured minimum.
    Low,
    /// Within bounds (or no thresholds configured).
    Ok,
    /// Above the configured maximum.
    Over,
}

/// Input for a stock alert evaluation: one product/warehouse row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockAlertParams {
    /// Available quantity (on-hand minus reserved). May arrive negative
    /// from the backend; it is clamped to zero before classification.
    pub disponible: f64,

    /// Reorder minimum. `None`, non-finite, negative or zero all mean
    /// "no minimum configured".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<f64>,

    /// Overstock maximum, same absence rules as the minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_maximo: Option<f64>,
}

/// Result of a stock alert evaluation. Pure derived value: no identity,
/// no lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockAlertEvaluation {
    /// The classification (LOW / OK / OVER).
    #[serde(rename = "type")]
    pub alert_type: StockAlertType,

    /// Whether the situation needs immediate attention. Only LOW alerts
    /// can be critical; OVER and OK never are.
    pub is_critical: bool,

    /// For LOW: units needed to reach the minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<f64>,

    /// For OVER: units above the maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess: Option<f64>,
}

// =============================================================================
// Normalization
// =============================================================================

/// Available quantity: non-finite becomes 0, negative is clamped to 0.
fn normalize_quantity(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}

/// Threshold: only strictly positive finite values are active.
fn normalize_threshold(value: Option<f64>) -> Option<f64> {
    let value = value.filter(|v| v.is_finite())?;
    // Negative collapses to 0, and 0 means "not configured"
    let value = value.max(0.0);
    if value > 0.0 {
        Some(value)
    } else {
        None
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Classifies a stock level as LOW, OK or OVER.
///
/// The max-check runs before the min-check; that ordering is part of the
/// contract, not an implementation accident. The min boundary is
/// inclusive: a quantity exactly at the minimum is already LOW.
///
/// ## Example
/// ```rust
/// use kipu_core::stock::{stock_alert_type, StockAlertParams, StockAlertType};
///
/// let params = StockAlertParams {
///     disponible: 5.0,
///     stock_minimo: Some(5.0),
///     stock_maximo: None,
/// };
/// assert_eq!(stock_alert_type(&params), StockAlertType::Low);
/// ```
pub fn stock_alert_type(params: &StockAlertParams) -> StockAlertType {
    let disponible = normalize_quantity(params.disponible);
    let minimo = normalize_threshold(params.stock_minimo);
    let maximo = normalize_threshold(params.stock_maximo);

    if let Some(maximo) = maximo {
        if disponible > maximo {
            return StockAlertType::Over;
        }
    }

    if let Some(minimo) = minimo {
        if disponible <= minimo {
            return StockAlertType::Low;
        }
    }

    StockAlertType::Ok
}

/// Evaluates a stock level into a full alert: classification, criticality
/// and the missing/excess quantity relative to the violated threshold.
///
/// ## Criticality
/// - LOW with a configured minimum: critical when the quantity is at or
///   below half the minimum ([`FACTOR_STOCK_CRITICO`]).
/// - LOW without a configured minimum: critical only when completely out.
/// - OVER and OK: never critical.
///
/// ## Example
/// ```rust
/// use kipu_core::stock::{evaluate_stock_alert, StockAlertParams, StockAlertType};
///
/// let eval = evaluate_stock_alert(&StockAlertParams {
///     disponible: 2.0,
///     stock_minimo: Some(6.0),
///     stock_maximo: None,
/// });
/// assert_eq!(eval.alert_type, StockAlertType::Low);
/// assert!(eval.is_critical); // 2 <= 6 * 0.5
/// assert_eq!(eval.missing, Some(4.0));
/// ```
pub fn evaluate_stock_alert(params: &StockAlertParams) -> StockAlertEvaluation {
    let disponible = normalize_quantity(params.disponible);
    let minimo = normalize_threshold(params.stock_minimo);
    let maximo = normalize_threshold(params.stock_maximo);

    match stock_alert_type(params) {
        StockAlertType::Low => {
            let (is_critical, missing) = match minimo {
                Some(minimo) => (
                    disponible <= minimo * FACTOR_STOCK_CRITICO,
                    Some((minimo - disponible).max(0.0)),
                ),
                None => (disponible == 0.0, None),
            };
            StockAlertEvaluation {
                alert_type: StockAlertType::Low,
                is_critical,
                missing,
                excess: None,
            }
        }
        StockAlertType::Over => StockAlertEvaluation {
            alert_type: StockAlertType::Over,
            is_critical: false,
            missing: None,
            excess: maximo.map(|maximo| (disponible - maximo).max(0.0)),
        },
        StockAlertType::Ok => StockAlertEvaluation {
            alert_type: StockAlertType::Ok,
            is_critical: false,
            missing: None,
            excess: None,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
