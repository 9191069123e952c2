pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CONFIG_ENV_PREFIX: &str = "WARDEN";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_TOKEN_TTL_IN_SECONDS: i64 = 600;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";
}
