//! Input checks shared by the engine entry points.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Rejects negative money amounts.
pub(crate) fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::validation(
            field,
            format!("{} must not be negative", amount),
        ));
    }
    Ok(())
}

/// Multiplies two amounts, rejecting a product too large for `Decimal`.
pub(crate) fn checked_mul(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::validation(field, format!("{} is too large", lhs)))
}

/// Adds two amounts, rejecting a sum too large for `Decimal`.
pub(crate) fn checked_add(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::validation(field, "total is too large"))
}
