use std::env;

/// Reads an environment variable, treating an empty value as unset.
pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_optional_env_present() {
        unsafe {
            std::env::set_var("PARAM_STORE_OPT_VAR", "value");
        }
        assert_eq!(optional_env("PARAM_STORE_OPT_VAR"), Some("value".to_string()));

        unsafe {
            std::env::remove_var("PARAM_STORE_OPT_VAR");
        }
    }

    #[test]
    #[serial]
    fn test_optional_env_empty_is_none() {
        unsafe {
            std::env::set_var("PARAM_STORE_EMPTY_VAR", "");
        }
        assert_eq!(optional_env("PARAM_STORE_EMPTY_VAR"), None);

        unsafe {
            std::env::remove_var("PARAM_STORE_EMPTY_VAR");
        }
    }

    #[test]
    #[serial]
    fn test_optional_env_missing() {
        unsafe {
            std::env::remove_var("PARAM_STORE_MISSING");
        }
        assert_eq!(optional_env("PARAM_STORE_MISSING"), None);
    }
}
