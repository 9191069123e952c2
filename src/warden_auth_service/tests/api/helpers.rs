use fake::{Fake, faker::internet::en::Username as FakeUsername};
use secrecy::Secret;
use serde::Serialize;
use tokio::net::TcpListener;
use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtAuthConfig, JwtTokenIssuer, config::test,
};
use warden_auth_service::AuthService;

pub const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub jwt_config: JwtAuthConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let jwt_config = JwtAuthConfig {
            jwt_secret: Secret::from(test::JWT_SECRET.to_string()),
            token_ttl_in_seconds: 600,
        };

        let auth_service = AuthService::new(
            HashMapUserStore::new(),
            Argon2PasswordHasher::default(),
            JwtTokenIssuer::new(jwt_config.clone()),
            ASSETS_DIR,
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(auth_service.run_standalone(listener, None));

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            jwt_config,
        }
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_page(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn get_random_username() -> String {
    FakeUsername().fake()
}
