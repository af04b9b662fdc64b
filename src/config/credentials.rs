use serde::Deserialize;
use std::fmt;

/// Login identifier (CPF) and password. Fixed for the lifetime of a session.
#[derive(Deserialize, Clone)]
pub struct Credentials {
    pub cpf: String,
    password: String,
}

impl Credentials {
    pub fn new(cpf: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cpf", &self.cpf)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("12345678900", "hunter2");
        let printed = format!("{credentials:?}");
        assert!(printed.contains("12345678900"));
        assert!(!printed.contains("hunter2"));
    }
}
