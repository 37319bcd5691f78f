use crate::domain::model::{ConstraintKey, Constraints, RawConstraints};
use std::str::FromStr;

/// Builds a complete `Constraints` record from raw answers.
///
/// Values outside a key's enumeration, and missing keys, fall back to the
/// documented default for that key. Unknown keys are ignored. Never fails.
pub fn normalize(raw: &RawConstraints) -> Constraints {
    let defaults = Constraints::default();

    Constraints {
        budget: field(raw, ConstraintKey::Budget, defaults.budget),
        data_privacy: field(raw, ConstraintKey::DataPrivacy, defaults.data_privacy),
        scalability: field(raw, ConstraintKey::Scalability, defaults.scalability),
        vendor_lockin_tolerance: field(
            raw,
            ConstraintKey::VendorLockinTolerance,
            defaults.vendor_lockin_tolerance,
        ),
    }
}

fn field<T>(raw: &RawConstraints, key: ConstraintKey, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match raw.get(key) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::debug!(
                "Unrecognized {} value '{}', using default '{}'",
                key.as_str(),
                value,
                default
            );
            default
        }),
        None => {
            tracing::debug!("No {} given, using default '{}'", key.as_str(), default);
            default
        }
    }
}
