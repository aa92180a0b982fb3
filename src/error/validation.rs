use thiserror::Error;

/// Field-level and cross-field constraint violations, raised before a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be greater than or equal to {min}")]
    BelowMinimum { field: &'static str, min: String },
    #[error("{field} must be less than or equal to {max}")]
    AboveMaximum { field: &'static str, max: String },
    #[error("{field} must have at most {max_digits} digits with {decimal_places} decimal places")]
    InvalidDecimal {
        field: &'static str,
        max_digits: u32,
        decimal_places: u32,
    },
    #[error("{value:?} is not a valid choice for {field}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("A record with {field} {value:?} already exists")]
    Duplicate { field: &'static str, value: String },
    #[error("Sum of account types ({sum}) must equal total accounts ({total})")]
    AccountTotalMismatch { total: i32, sum: i64 },
}
