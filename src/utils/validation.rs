use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::models::flight::Flight;

// One failed constraint on one field. Nested fields are reported with a
// dotted path, e.g. "seats.economy_seats".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

// Run every field constraint on the flight and flatten the outcome into
// field/message pairs, sorted by field for stable output
pub fn validate_flight(flight: &Flight) -> Result<(), Vec<FieldError>> {
    match flight.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(collect_field_errors("", &errors)),
    }
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected = Vec::new();

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    collected.push(FieldError {
                        field: path.clone(),
                        message: error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collected.extend(collect_field_errors(&path, nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collected.extend(collect_field_errors(&format!("{path}[{index}]"), nested));
                }
            }
        }
    }

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}

// Required strings must contain at least one non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

// Prices must be strictly positive when set
pub fn positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive_price");
        error.message = Some("price must be greater than 0".into());
        return Err(error);
    }
    Ok(())
}
