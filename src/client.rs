use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, EmployeeError, Result};
use crate::responses::{CreateResponse, ErrorBody, HealthResponse};
use crate::types::{Employee, NewEmployee};

const EMPLOYEES_PATH: &str = "api/employees";
const HEALTH_PATH: &str = "api/";

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// The two backend calls the screens make.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    async fn create_employee(&self, draft: &NewEmployee) -> ApiResult<Employee>;
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;
}

pub struct EmployeeClient {
    http: Client,
    base: Url,
}

impl EmployeeClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EmployeeError::HttpClient)?;

        Ok(Self { http, base })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url()?, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    /// `api/employees/<id>` with the id encoded as a single path segment.
    fn employee_url(&self, id: &str) -> ApiResult<Url> {
        let mut url = self.endpoint(EMPLOYEES_PATH)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Request(format!("cannot append to {}", self.base)))?
            .push(id);
        Ok(url)
    }

    pub async fn get_employee(&self, id: &str) -> ApiResult<Employee> {
        let url = self.employee_url(id)?;
        self.send(self.http.get(url)).await
    }

    pub async fn health(&self) -> ApiResult<HealthResponse> {
        let url = self.endpoint(HEALTH_PATH)?;
        self.send(self.http.get(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request failed before a response arrived");
            ApiError::classify(&e)
        })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "response received");

        if !status.is_success() {
            let body = response.text().await.map_err(|e| ApiError::classify(&e))?;
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| format!("API error: {}", status.as_u16()));

            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::classify(&e))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::UnexpectedResponse(e.to_string()))
    }
}

impl EmployeeApi for EmployeeClient {
    async fn create_employee(&self, draft: &NewEmployee) -> ApiResult<Employee> {
        let url = self.endpoint(EMPLOYEES_PATH)?;
        tracing::info!(name = %draft.name, "creating employee");

        let response: CreateResponse = self.send(self.http.post(url).json(draft)).await?;
        Ok(response.into_employee(draft.clone()))
    }

    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let url = self.endpoint(EMPLOYEES_PATH)?;
        tracing::info!(%url, "fetching employees");

        self.send(self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn client(base: Url) -> EmployeeClient {
        EmployeeClient::new(base, Duration::from_millis(500)).unwrap()
    }

    fn draft() -> NewEmployee {
        NewEmployee {
            name: "Dana".to_string(),
            position: "Engineer".to_string(),
            salary: 72000.0,
        }
    }

    #[tokio::test]
    async fn test_list_employees() {
        let router = Router::new().route(
            "/api/employees",
            get(|| async {
                Json(json!([
                    {"_id": "1", "name": "Dana", "position": "Engineer", "salary": 72000},
                    {"_id": "2", "name": "Ian", "position": "Clerk", "salary": 41000.5}
                ]))
            }),
        );
        let base = spawn(router).await;

        let employees = client(base).list_employees().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].name, "Ian");
        assert_eq!(employees[1].salary, 41000.5);
    }

    #[tokio::test]
    async fn test_create_employee_posts_draft() {
        let router = Router::new().route(
            "/api/employees",
            axum::routing::post(|Json(body): Json<Value>| async move {
                let mut stored = body;
                stored["_id"] = json!("new-id");
                (StatusCode::CREATED, Json(stored))
            }),
        );
        let base = spawn(router).await;

        let employee = client(base).create_employee(&draft()).await.unwrap();
        assert_eq!(employee.id, "new-id");
        assert_eq!(employee.position, "Engineer");
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let router = Router::new().route(
            "/api/employees",
            axum::routing::post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Name and salary are required"})),
                )
            }),
        );
        let base = spawn(router).await;

        let err = client(base).create_employee(&draft()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Name and salary are required".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let router = Router::new().route(
            "/api/employees",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn(router).await;

        let err = client(base).list_employees().await.unwrap_err();
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[tokio::test]
    async fn test_timeout_is_classified() {
        let router = Router::new().route(
            "/api/employees",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!([]))
            }),
        );
        let base = spawn(router).await;

        let client = EmployeeClient::new(base, Duration::from_millis(100)).unwrap();
        let err = client.list_employees().await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_is_classified() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{addr}/")).unwrap();
        let err = client(base).list_employees().await.unwrap_err();
        assert_eq!(err, ApiError::Unreachable);
    }

    #[tokio::test]
    async fn test_unexpected_shape() {
        let router = Router::new().route(
            "/api/employees",
            get(|| async { Json(json!({"employees": []})) }),
        );
        let base = spawn(router).await;

        let err = client(base).list_employees().await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let router = Router::new().route(
            "/api/employees/{id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": "Employee not found"})),
                )
            }),
        );
        let base = spawn(router).await;

        let err = client(base).get_employee("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_health() {
        let router = Router::new().route(
            "/api/",
            get(|| async { Json(json!({"status": "ok", "message": "Backend is running"})) }),
        );
        let base = spawn(router).await;

        let health = client(base).health().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn test_employee_url_encodes_id_as_one_segment() {
        let client = client(Url::parse("http://hr.local/").unwrap());
        assert_eq!(
            client.employee_url("a/../b").unwrap().as_str(),
            "http://hr.local/api/employees/a%2F..%2Fb"
        );
        assert_eq!(
            client.employee_url("a?b#c").unwrap().as_str(),
            "http://hr.local/api/employees/a%3Fb%23c"
        );
    }

    #[tokio::test]
    async fn test_get_employee_keeps_id_intact() {
        let router = Router::new()
            .route(
                "/api/employees/{id}",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"_id": id, "name": "Dana", "position": "Engineer", "salary": 1}))
                }),
            )
            .route("/api/", get(|| async { Json(json!({"status": "ok"})) }));
        let base = spawn(router).await;

        let employee = client(base).get_employee("a/../b").await.unwrap();
        assert_eq!(employee.id, "a/../b");
    }

    #[tokio::test]
    async fn test_list_tolerates_records_without_position() {
        let router = Router::new().route(
            "/api/employees",
            get(|| async {
                Json(json!([
                    {"_id": "1", "name": "Dana", "position": "Engineer", "salary": 72000},
                    {"_id": "2", "name": "Ian", "salary": 41000}
                ]))
            }),
        );
        let base = spawn(router).await;

        let employees = client(base).list_employees().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].name, "Ian");
        assert_eq!(employees[1].position, "");
    }

    #[tokio::test]
    async fn test_timeout_while_reading_error_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = "HTTP/1.1 500 Internal Server Error\r\n\
                        Content-Type: application/json\r\n\
                        Content-Length: 64\r\n\r\n{\"error\":";
            socket.write_all(head.as_bytes()).await.unwrap();
            // Never finish the body.
            tokio::time::sleep(Duration::from_secs(3)).await;
        });

        let base = Url::parse(&format!("http://{addr}/")).unwrap();
        let client = EmployeeClient::new(base, Duration::from_millis(200)).unwrap();
        let err = client.list_employees().await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    }
}
