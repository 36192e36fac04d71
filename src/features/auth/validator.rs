use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: Option<String>,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // exp/nbf/iss/aud are checked by jsonwebtoken itself
    sub: String,
    #[serde(default)]
    sid: Option<String>,
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: Option<String>,
        leeway: Duration,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        validation.leeway = self.leeway;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let token_data = decode::<Claims>(token, &decoding_key, &self.validation())
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;
        if claims.sub.trim().is_empty() {
            return Err(AppError::Auth("Token has an empty subject".to_string()));
        }

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            session_id: claims.sid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::get, Json, Router};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use rsa::pkcs1::DecodeRsaPrivateKey;
    use rsa::traits::PublicKeyParts;
    use rsa::RsaPrivateKey;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tokio::sync::RwLock;

    const TEST_KEY_PEM: &str = include_str!("testdata/rsa_test_key.pem");
    const ISSUER: &str = "https://issuer.example";

    type SharedJwks = Arc<RwLock<Value>>;

    fn validator_at(jwks_url: &str, audience: Option<&str>) -> JwtValidator {
        JwtValidator::new(
            Arc::new(JwksClient::new(jwks_url, Duration::from_secs(60))),
            ISSUER.to_string(),
            audience.map(str::to_string),
            Duration::from_secs(30),
        )
    }

    fn validator() -> JwtValidator {
        validator_at("http://127.0.0.1:9/.well-known/jwks.json", None)
    }

    fn jwk(kid: &str) -> Value {
        let public = RsaPrivateKey::from_pkcs1_pem(TEST_KEY_PEM)
            .unwrap()
            .to_public_key();
        json!({
            "kty": "RSA",
            "kid": kid,
            "alg": "RS256",
            "use": "sig",
            "n": URL_SAFE_NO_PAD.encode(public.n().to_bytes_be()),
            "e": URL_SAFE_NO_PAD.encode(public.e().to_bytes_be())
        })
    }

    async fn serve_jwks(State(jwks): State<SharedJwks>) -> Json<Value> {
        Json(jwks.read().await.clone())
    }

    /// Serves `keys` at a local JWKS endpoint; the returned handle swaps them
    async fn spawn_jwks_server(keys: Vec<Value>) -> (String, SharedJwks) {
        let jwks: SharedJwks = Arc::new(RwLock::new(json!({ "keys": keys })));
        let app = Router::new()
            .route("/jwks", get(serve_jwks))
            .with_state(Arc::clone(&jwks));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (format!("http://{}/jwks", addr), jwks)
    }

    fn mint(kid: &str, claims: Value) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());
        let key = EncodingKey::from_rsa_pem(TEST_KEY_PEM.as_bytes()).unwrap();
        encode(&header, &claims, &key).unwrap()
    }

    fn claims(issuer: &str, expires_in: i64) -> Value {
        let now = chrono::Utc::now().timestamp();
        json!({
            "iss": issuer,
            "sub": "user_42",
            "sid": "sess_1",
            "aud": "store-admin",
            "iat": now,
            "exp": now + expires_in
        })
    }

    #[tokio::test]
    async fn test_valid_token_becomes_authenticated_user() {
        let (url, _) = spawn_jwks_server(vec![jwk("k1")]).await;

        let user = validator_at(&url, None)
            .validate_token(&mint("k1", claims(ISSUER, 300)))
            .await
            .unwrap();

        assert_eq!(user.user_id, "user_42");
        assert_eq!(user.session_id.as_deref(), Some("sess_1"));
    }

    #[tokio::test]
    async fn test_wrong_issuer_is_rejected() {
        let (url, _) = spawn_jwks_server(vec![jwk("k1")]).await;

        let err = validator_at(&url, None)
            .validate_token(&mint("k1", claims("https://other.example", 300)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let (url, _) = spawn_jwks_server(vec![jwk("k1")]).await;

        // Past the 30s leeway
        let err = validator_at(&url, None)
            .validate_token(&mint("k1", claims(ISSUER, -600)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn test_audience_is_checked_when_configured() {
        let (url, _) = spawn_jwks_server(vec![jwk("k1")]).await;
        let token = mint("k1", claims(ISSUER, 300));

        assert!(validator_at(&url, Some("store-admin"))
            .validate_token(&token)
            .await
            .is_ok());

        let err = validator_at(&url, Some("billing"))
            .validate_token(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn test_rotated_key_is_fetched_on_unknown_kid() {
        let (url, jwks) = spawn_jwks_server(vec![jwk("k1")]).await;
        let validator = validator_at(&url, None);

        validator
            .validate_token(&mint("k1", claims(ISSUER, 300)))
            .await
            .unwrap();

        // k2 is unknown to the fresh cache and must trigger a refetch
        *jwks.write().await = json!({ "keys": [jwk("k1"), jwk("k2")] });

        let user = validator
            .validate_token(&mint("k2", claims(ISSUER, 300)))
            .await
            .unwrap();
        assert_eq!(user.user_id, "user_42");
    }

    #[tokio::test]
    async fn test_unknown_kid_after_refetch_is_rejected() {
        let (url, _) = spawn_jwks_server(vec![jwk("k1")]).await;

        let err = validator_at(&url, None)
            .validate_token(&mint("k9", claims(ISSUER, 300)))
            .await
            .unwrap_err();
        match err {
            AppError::Auth(msg) => assert!(msg.contains("Key not found")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected_before_key_lookup() {
        let err = validator().validate_token("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn test_hs256_token_is_rejected() {
        // {"alg":"HS256","typ":"JWT","kid":"k1"}.{"sub":"user_1"}.sig
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCIsImtpZCI6ImsxIn0.eyJzdWIiOiJ1c2VyXzEifQ.c2ln";
        let err = validator().validate_token(token).await.unwrap_err();
        match err {
            AppError::Auth(msg) => assert!(msg.contains("Unsupported algorithm")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_audience_is_optional() {
        let v = validator();
        assert!(!v.validation().validate_aud);
    }
}
