//! Field validators shared by the parameter types.

use std::fmt::Display;

use rust_decimal::Decimal;
use sea_orm::ActiveEnum;

use crate::error::validation::ValidationError;

/// Field and cross-field checks run before a record is written.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Parses the stored string value of a choice field, e.g. `"fiber_30"`.
///
/// # Returns
/// - `Ok(E)` - The matching enum variant
/// - `Err(ValidationError::InvalidChoice)` - `value` is not one of the enumerated strings
pub fn parse_choice<E>(field: &'static str, value: &str) -> Result<E, ValidationError>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&value.to_string()).map_err(|_| ValidationError::InvalidChoice {
        field,
        value: value.to_string(),
    })
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

pub fn min_value<T>(field: &'static str, value: T, min: T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value < min {
        return Err(ValidationError::BelowMinimum {
            field,
            min: min.to_string(),
        });
    }

    Ok(())
}

pub fn max_value<T>(field: &'static str, value: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value > max {
        return Err(ValidationError::AboveMaximum {
            field,
            max: max.to_string(),
        });
    }

    Ok(())
}

pub fn range<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    min_value(field, value, min)?;
    max_value(field, value, max)
}

/// Checks a decimal fits a `DECIMAL(max_digits, decimal_places)` column
/// without rounding.
pub fn decimal_digits(
    field: &'static str,
    value: &Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Result<(), ValidationError> {
    let normalized = value.normalize();
    let whole = normalized.trunc().abs();
    let whole_digits = if whole.is_zero() {
        0
    } else {
        whole.to_string().len() as u32
    };

    if normalized.scale() > decimal_places || whole_digits > max_digits - decimal_places {
        return Err(ValidationError::InvalidDecimal {
            field,
            max_digits,
            decimal_places,
        });
    }

    Ok(())
}
