use std::env;

#[derive(Clone)]
pub struct ApiConfig {
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or_else(|| {
                tracing::warn!("PORT not set in environment, using default");
                3000
            });

        Self { port }
    }
}
