//! Rounding helpers shared by the budget and feedback calculations.
//!
//! Monetary values are whole units and use integer half-up division so the
//! results never depend on floating point representation.

/// Divides `numerator / denominator`, rounding halves away from zero.
///
/// `denominator` must be positive.
pub fn div_round_half_up(numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator > 0);
    let rounded = div_round_half_up_wide(i128::from(numerator), i128::from(denominator));
    // |rounded| <= |numerator| for a positive denominator.
    rounded as i64
}

/// Rounds `amount * weight / total_weight` half up without intermediate
/// overflow.
///
/// `total_weight` must be positive and at least `weight`, so the result
/// never exceeds `amount`.
pub fn share_round_half_up(amount: i64, weight: i64, total_weight: i64) -> i64 {
    debug_assert!(total_weight > 0 && weight <= total_weight);
    let product = i128::from(amount) * i128::from(weight);
    div_round_half_up_wide(product, i128::from(total_weight)) as i64
}

fn div_round_half_up_wide(numerator: i128, denominator: i128) -> i128 {
    let doubled = 2 * numerator;
    if numerator >= 0 {
        (doubled + denominator) / (2 * denominator)
    } else {
        -((-doubled + denominator) / (2 * denominator))
    }
}

/// Rounds `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
