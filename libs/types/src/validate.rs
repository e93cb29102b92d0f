//! Boundary validation
//!
//! Decoding only guarantees the shape of a value. Constraints that serde
//! cannot express (string lengths, numeric bounds) are checked through
//! [`Validate`] before anything reaches the store.

use crate::errors::FieldError;

/// Constraint check run on a freshly decoded value
pub trait Validate {
    /// Returns every violated constraint, or `Ok(())` if there are none.
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Elements are checked independently; error locations are prefixed with
/// the element index.
impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors = self
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.validate().err().map(|errs| (index, errs)))
            .flat_map(|(index, errs)| errs.into_iter().map(move |err| err.prefixed(index)))
            .collect();
        check(errors)
    }
}

/// Turns a list of collected violations into a validation result.
pub fn check(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Loc;

    struct Positive(i64);

    impl Validate for Positive {
        fn validate(&self) -> Result<(), Vec<FieldError>> {
            if self.0 > 0 {
                Ok(())
            } else {
                Err(vec![FieldError::new("value", "must be positive", "value_error")])
            }
        }
    }

    #[test]
    fn test_empty_vec_is_valid() {
        let items: Vec<Positive> = Vec::new();
        assert!(items.validate().is_ok());
    }

    #[test]
    fn test_vec_collects_errors_from_every_element() {
        let items = vec![Positive(-1), Positive(3), Positive(0)];
        let errors = items.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].loc, vec![Loc::Index(0), Loc::from("value")]);
        assert_eq!(errors[1].loc, vec![Loc::Index(2), Loc::from("value")]);
    }
}
