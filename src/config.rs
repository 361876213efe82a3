use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// CSV the diary is seeded from at startup, if it exists.
    pub sample_data_path: String,

    /// When true the risk assessment adds uniform(-8, 8) noise before
    /// clamping. Off by default so repeated assessments agree.
    pub risk_jitter: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            sample_data_path: env::var("SAMPLE_DATA_PATH")
                .unwrap_or_else(|_| "data/sample_mood_log.csv".into()),

            risk_jitter: env::var("RISK_JITTER")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
