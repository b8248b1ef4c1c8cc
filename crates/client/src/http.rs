use crate::config::ClientConfig;
use crate::error::ServiceError;
use crate::service::{CubeService, Prediction};
use crate::wire::{
    Health, PredictResponse, RotateRequest, ScrambleRequest, StateRequest, StateResponse,
};
use cubeview_common::{CubeState, Move};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Client for the remote cube service's JSON API.
#[derive(Debug, Clone)]
pub struct HttpCubeService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCubeService {
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use a preconfigured client. Trailing slashes on `base_url` are dropped.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ServiceError> {
        let url = self.url("/health");
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).send().await?;
        Self::decode(resp).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = self.client.post(&url).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ServiceError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "cube service rejected request");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }

    async fn post_for_state<B>(&self, path: &str, body: &B) -> Result<CubeState, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let StateResponse { state } = self.post(path, body).await?;
        if let Err(e) = state.validate() {
            tracing::warn!(error = %e, path, "cube service returned a malformed state");
            return Err(e.into());
        }
        Ok(state)
    }
}

impl CubeService for HttpCubeService {
    async fn scramble(&self, moves: u32) -> Result<CubeState, ServiceError> {
        self.post_for_state("/cube/scramble", &ScrambleRequest { moves })
            .await
    }

    async fn rotate(&self, state: &CubeState, mv: Move) -> Result<CubeState, ServiceError> {
        self.post_for_state("/cube/rotate", &RotateRequest { state, mv })
            .await
    }

    async fn predict_move(&self, state: &CubeState) -> Result<Prediction, ServiceError> {
        let resp: PredictResponse = self
            .post("/cube/predict-move", &StateRequest { state })
            .await?;
        Ok(Prediction {
            mv: resp.mv.parse()?,
            confidence: resp.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_common::{CubeError, Face};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response on a loopback port; the handle yields the raw request.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });
        (format!("http://{addr}/"), handle)
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn service(base_url: &str) -> HttpCubeService {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpCubeService::with_client(client, base_url)
    }

    fn state_body(state: &CubeState) -> String {
        format!(r#"{{"state":{}}}"#, serde_json::to_string(state).unwrap())
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig {
            base_url: "http://localhost:8000//".into(),
            ..ClientConfig::default()
        };
        let svc = HttpCubeService::new(&config).unwrap();
        assert_eq!(svc.base_url(), "http://localhost:8000");
        assert_eq!(svc.url("/cube/rotate"), "http://localhost:8000/cube/rotate");
    }

    #[tokio::test]
    async fn rotate_posts_state_and_move() {
        let (url, server) = serve_once("200 OK", state_body(&CubeState::solved())).await;
        let state = service(&url)
            .rotate(&CubeState::solved(), Move::ccw(Face::Front))
            .await
            .unwrap();
        assert!(state.is_solved());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /cube/rotate HTTP/1.1"));
        assert!(request.contains(r#""move":"F'""#));
        assert!(request.contains(r#""state":[0,0,0,0,0,0,0,0,0,1,"#));
    }

    #[tokio::test]
    async fn scramble_posts_move_count() {
        let (url, server) = serve_once("200 OK", state_body(&CubeState::solved())).await;
        service(&url).scramble(25).await.unwrap();
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /cube/scramble HTTP/1.1"));
        assert!(request.ends_with(r#"{"moves":25}"#));
    }

    #[tokio::test]
    async fn predict_parses_move_and_confidence() {
        let (url, server) = serve_once("200 OK", r#"{"move":"R'","confidence":0.5}"#.into()).await;
        let p = service(&url)
            .predict_move(&CubeState::solved())
            .await
            .unwrap();
        assert_eq!(p.mv, Move::ccw(Face::Right));
        assert_eq!(p.confidence, Some(0.5));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /cube/predict-move HTTP/1.1"));
    }

    #[tokio::test]
    async fn predict_rejects_unknown_move_token() {
        let (url, _server) = serve_once("200 OK", r#"{"move":"X2"}"#.into()).await;
        let err = service(&url)
            .predict_move(&CubeState::solved())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Cube(CubeError::InvalidMove(_))));
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let (url, _server) = serve_once(
            "422 Unprocessable Entity",
            r#"{"detail":"state must be length 54"}"#.into(),
        )
        .await;
        let err = service(&url).scramble(20).await.unwrap_err();
        match err {
            ServiceError::Status { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("length 54"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_state_is_rejected() {
        let (url, _server) = serve_once("200 OK", r#"{"state":[0,1,2]}"#.into()).await;
        let err = service(&url).scramble(1).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Cube(CubeError::InvalidLength { actual: 3, .. })
        ));
    }

    #[tokio::test]
    async fn health_check() {
        let (url, server) = serve_once("200 OK", r#"{"status":"ok","device":"cpu"}"#.into()).await;
        let health = service(&url).health().await.unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.device.as_deref(), Some("cpu"));
        assert!(server.await.unwrap().starts_with("GET /health HTTP/1.1"));
    }
}
