#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(secret_key: impl Into<String>, leeway_seconds: u64) -> Self {
        Self {
            secret_key: secret_key.into(),
            leeway_seconds,
        }
    }
}
