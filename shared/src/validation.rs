//! Selection checks run before any scoring

use validator::Validate;

use crate::error::PairingError;

/// Validate a request, reporting the first failing field in `field_order`.
///
/// `field_order` lists the struct field names in the order the form presents
/// them so the reported field does not depend on map iteration order.
pub fn require_selections<T: Validate>(
    request: &T,
    field_order: &[&'static str],
) -> Result<(), PairingError> {
    let errors = match request.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let failing = errors.field_errors();
    let field = field_order
        .iter()
        .copied()
        .find(|name| failing.contains_key(name))
        .or_else(|| failing.keys().next().copied())
        .unwrap_or("selection");

    let message = failing
        .get(field)
        .and_then(|errs| errs.first())
        .and_then(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| format!("{} is required", field));

    tracing::debug!(field, "rejected pairing request with missing selection");

    Err(PairingError::MissingSelection {
        field: field.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomPairingRequest;
    use rust_decimal::Decimal;

    fn custom(coffee: &str, pastry: &str) -> CustomPairingRequest {
        CustomPairingRequest {
            coffee: coffee.to_string(),
            pastry: pastry.to_string(),
            stock: 50,
            profit: Decimal::new(400, 2),
            notes: String::new(),
        }
    }

    #[test]
    fn test_complete_selection_passes() {
        assert!(require_selections(&custom("Dark Roast", "Croissant"), &["coffee", "pastry"]).is_ok());
    }

    #[test]
    fn test_missing_coffee_reported_first() {
        let err = require_selections(&custom("", ""), &["coffee", "pastry"]).unwrap_err();
        assert_eq!(
            err,
            PairingError::MissingSelection {
                field: "coffee".to_string(),
                message: "Please enter a coffee name".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_pastry() {
        let err = require_selections(&custom("Latte", ""), &["coffee", "pastry"]).unwrap_err();
        assert!(matches!(err, PairingError::MissingSelection { ref field, .. } if field == "pastry"));
    }

    #[test]
    fn test_whitespace_counts_as_selection() {
        assert!(require_selections(&custom(" ", "Scone"), &["coffee", "pastry"]).is_ok());
    }
}
