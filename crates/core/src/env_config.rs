//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, treating blank values as unset.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_owned(),
        Ok(_) => {
            tracing::warn!(var, default, "blank env var value, using default");
            default.to_owned()
        },
        Err(_) => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "WELF_TEST_ENV_PARSE_VALID_41873";
        set(var_name, "42");
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "WELF_TEST_ENV_PARSE_INVALID_41874";
        set(var_name, "half-a-minute");
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "WELF_TEST_ENV_PARSE_MISSING_41875";
        unset(var_name);
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn test_env_string_blank_uses_default() {
        let var_name = "WELF_TEST_ENV_STRING_BLANK_41876";
        set(var_name, "   ");
        assert_eq!(env_string_with_default(var_name, "http://x"), "http://x");
        unset(var_name);
    }

    #[test]
    fn test_env_string_trims_value() {
        let var_name = "WELF_TEST_ENV_STRING_TRIM_41877";
        set(var_name, " http://prices.local ");
        assert_eq!(env_string_with_default(var_name, "http://x"), "http://prices.local");
        unset(var_name);
    }
}
