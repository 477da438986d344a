use crate::utils::error::{DrawError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// `0 <= a <= b <= c`
pub fn validate_tier_bounds(a: usize, b: usize, c: usize) -> Result<()> {
    if a <= b && b <= c {
        Ok(())
    } else {
        Err(DrawError::InvalidTierBounds { a, b, c })
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DrawError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.path", "uids.txt").is_ok());
        assert!(validate_path("source.path", "").is_err());
        assert!(validate_path("source.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_tier_bounds() {
        assert!(validate_tier_bounds(0, 0, 0).is_ok());
        assert!(validate_tier_bounds(5, 10, 25).is_ok());
        assert!(validate_tier_bounds(5, 5, 5).is_ok());
        assert!(validate_tier_bounds(6, 5, 25).is_err());
        assert!(validate_tier_bounds(5, 26, 25).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3usize);
        let missing: Option<usize> = None;
        assert_eq!(*validate_required_field("draw.a", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("draw.a", &missing),
            Err(DrawError::MissingConfigError { .. })
        ));
    }
}
