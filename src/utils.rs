//! Form validation helpers and small browser utilities.

/// Generic numeric input validation with optional bounds and a
/// user-facing message.
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// The device name is the only required free-text field.
pub fn validate_device_name(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("Device name is required".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Free storage accepts any non-negative number of gigabytes.
pub fn validate_free_storage(input: &str) -> Result<f64, String> {
    validate_numeric_input(input, Some(0.0), None, "Free storage")
}

/// Fire-and-forget clipboard write. The returned promise is dropped;
/// a denied permission simply leaves the clipboard untouched.
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_name_is_required() {
        assert!(validate_device_name("").is_err());
        assert!(validate_device_name("   ").is_err());
        assert_eq!(
            validate_device_name("  iPhone 11  ").unwrap(),
            "iPhone 11"
        );
    }

    #[test]
    fn free_storage_accepts_non_negative_numbers() {
        assert_eq!(validate_free_storage("15").unwrap(), 15.0);
        assert_eq!(validate_free_storage("4.5").unwrap(), 4.5);
        assert_eq!(validate_free_storage("0").unwrap(), 0.0);
        assert!(validate_free_storage("-1").is_err());
        assert!(validate_free_storage("").is_err());
        assert!(validate_free_storage("lots").is_err());
    }

    #[test]
    fn numeric_bounds_produce_readable_messages() {
        let err = validate_numeric_input::<u32>("150", Some(0), Some(100), "RAM usage").unwrap_err();
        assert_eq!(err, "RAM usage cannot exceed 100");
    }
}
