//! HTTP client for the MedAssyst backend
//!
//! Every network-touching operation composes on top of one generic
//! [`ApiClient::request`] call that wraps reqwest in the linear-backoff
//! [`RetryPolicy`]. Non-2xx statuses are mapped to [`AssistError::ApiError`]
//! and retried the same as transport failures; after the cap the last error
//! propagates unchanged to the caller.
//!
//! With `demo_mode` enabled in the config, diagnosis and history requests
//! are answered from an in-memory store without touching the network.

use crate::analysis::severity::SeverityClassifier;
use crate::api::retry::RetryPolicy;
use crate::api::types::{
    Consultation, DiagnosisRequest, DiagnosisResponse, HealthResponse, ServiceStatus,
};
use crate::config::Config;
use crate::errors::{AssistError, Result};
use chrono::Utc;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// HTTP client for the MedAssyst API
pub struct ApiClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,

    /// In-memory consultation store, present only in demo mode
    demo_store: Option<Mutex<Vec<Consultation>>>,
}

impl ApiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(AssistError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::new(config.api.max_retries, config.api.retry_delay_ms),
            demo_store: config.demo_mode.then(|| Mutex::new(Vec::new())),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether responses come from the in-memory demo store
    pub fn is_demo(&self) -> bool {
        self.demo_store.is_some()
    }

    /// Perform one logical request with retry, decoding a JSON body
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        self.retry
            .run(|| {
                let client = self.client.clone();
                let method = method.clone();
                let url = url.clone();
                let body = body.clone();

                async move {
                    let mut req = client.request(method, &url);
                    if let Some(json) = body {
                        req = req.json(&json);
                    }

                    let response = req.send().await?;
                    let status = response.status();

                    if !status.is_success() {
                        let message = response.text().await.unwrap_or_default();
                        return Err(AssistError::ApiError {
                            status: status.as_u16(),
                            message,
                        });
                    }

                    response
                        .json::<T>()
                        .await
                        .map_err(|e| AssistError::ResponseShape(e.to_string()))
                }
            })
            .await
    }

    /// Like [`request`](Self::request) but for endpoints with no response body
    async fn request_no_content(&self, method: Method, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);

        self.retry
            .run(|| {
                let client = self.client.clone();
                let method = method.clone();
                let url = url.clone();

                async move {
                    let response = client.request(method, &url).send().await?;
                    let status = response.status();

                    if !status.is_success() {
                        let message = response.text().await.unwrap_or_default();
                        return Err(AssistError::ApiError {
                            status: status.as_u16(),
                            message,
                        });
                    }

                    Ok(())
                }
            })
            .await
    }

    /// Request a diagnosis for free-text symptoms
    ///
    /// POST /api/consult. In demo mode the response is canned and the
    /// consultation is recorded in the in-memory store.
    pub async fn diagnose(&self, symptoms: &str) -> Result<DiagnosisResponse> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AssistError::ValidationError(
                "symptom description must not be empty".to_string(),
            ));
        }

        if let Some(store) = &self.demo_store {
            return Ok(self.demo_diagnose(store, symptoms));
        }

        let body = serde_json::to_value(DiagnosisRequest {
            symptoms: symptoms.to_string(),
            no_demo: None,
        })?;

        self.request(Method::POST, "/api/consult", Some(body)).await
    }

    /// Force a real upstream diagnosis: one attempt, no retry, no demo store
    pub async fn diagnose_direct(&self, symptoms: &str) -> Result<DiagnosisResponse> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AssistError::ValidationError(
                "symptom description must not be empty".to_string(),
            ));
        }

        let body = DiagnosisRequest {
            symptoms: symptoms.to_string(),
            no_demo: Some(true),
        };

        let url = format!("{}/api/consult", self.base_url);
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DiagnosisResponse>()
            .await
            .map_err(|e| AssistError::ResponseShape(e.to_string()))
    }

    /// Fetch the consultation history, newest first
    pub async fn history(&self) -> Result<Vec<Consultation>> {
        if let Some(store) = &self.demo_store {
            let mut items = store.lock().unwrap().clone();
            items.reverse();
            return Ok(items);
        }

        self.request(Method::GET, "/api/consultations/history", None)
            .await
    }

    /// Delete a single consultation by id
    pub async fn delete_consultation(&self, id: &str) -> Result<()> {
        if let Some(store) = &self.demo_store {
            let mut items = store.lock().unwrap();
            let before = items.len();
            items.retain(|c| c.id != id);
            if items.len() == before {
                return Err(AssistError::ApiError {
                    status: 404,
                    message: format!("consultation '{}' not found", id),
                });
            }
            return Ok(());
        }

        self.request_no_content(Method::DELETE, &format!("/api/consultations/{}", id))
            .await
    }

    /// Delete the entire consultation history
    pub async fn clear_history(&self) -> Result<()> {
        if let Some(store) = &self.demo_store {
            store.lock().unwrap().clear();
            return Ok(());
        }

        self.request_no_content(Method::DELETE, "/api/consultations")
            .await
    }

    /// Check whether the backend itself is reachable
    ///
    /// GET /health with a cache-busting query. Single attempt, never
    /// retried; any failure reads as "not healthy".
    pub async fn check_health(&self) -> bool {
        let url = format!(
            "{}/health?nocache={}",
            self.base_url,
            Utc::now().timestamp_millis()
        );

        match self
            .client
            .get(&url)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Status of the full diagnosis pipeline (backend + external proxy)
    ///
    /// Never fails: transport errors map to `Offline`, unexpected response
    /// shapes to `Degraded`.
    pub async fn api_status(&self) -> (ServiceStatus, Option<String>) {
        if !self.check_health().await {
            return (
                ServiceStatus::Offline,
                Some("Backend is not available".to_string()),
            );
        }

        let url = format!(
            "{}/api/health?nocache={}",
            self.base_url,
            Utc::now().timestamp_millis()
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(_) => {
                return (
                    ServiceStatus::Offline,
                    Some("Could not connect to external API service".to_string()),
                )
            }
        };

        if !response.status().is_success() {
            return (
                ServiceStatus::Degraded,
                Some("Unexpected response from API health check".to_string()),
            );
        }

        match response.json::<HealthResponse>().await {
            Ok(health) => match ServiceStatus::parse(&health.status) {
                Some(status) => (status, health.message),
                None => (
                    ServiceStatus::Degraded,
                    Some("Unexpected response from API health check".to_string()),
                ),
            },
            Err(_) => (
                ServiceStatus::Degraded,
                Some("Unexpected response from API health check".to_string()),
            ),
        }
    }

    /// Canned demo diagnosis: classify locally, record, respond
    ///
    /// The diagnosis text restates the complaint in canonical phrasing,
    /// the way a real upstream diagnosis names the symptom family, so the
    /// downstream specialist matcher has keywords to work with.
    fn demo_diagnose(&self, store: &Mutex<Vec<Consultation>>, symptoms: &str) -> DiagnosisResponse {
        let classifier = SeverityClassifier::default();

        let complaints = restate_complaints(symptoms);
        let diagnosis = if complaints.is_empty() {
            format!(
                "**Демо-режим.** По описанию «{}» рекомендуем обратиться к врачу \
                 для очной консультации. Это не медицинский диагноз.",
                symptoms
            )
        } else {
            format!(
                "**Демо-режим.** Отмеченные жалобы: {}. Рекомендуем обратиться \
                 к врачу для очной консультации. Это не медицинский диагноз.",
                complaints.join(", ")
            )
        };
        let severity = classifier.classify(symptoms, &diagnosis);

        let consultation = Consultation {
            id: Uuid::new_v4().to_string(),
            symptoms: symptoms.to_string(),
            diagnosis: diagnosis.clone(),
            created_at: Utc::now(),
            severity: Some(severity.code()),
        };

        let mut items = store.lock().unwrap();
        items.push(consultation);

        DiagnosisResponse {
            diagnosis,
            consultation_id: Some(items.len() as i64),
            severity: Some(severity.code()),
        }
    }
}

/// Complaint stems mapped to the canonical symptom phrasing used by the
/// specialization keyword tables
const DEMO_COMPLAINTS: &[(&str, &str)] = &[
    ("голов", "головная боль"),
    ("кружит", "головокружение"),
    ("горл", "боль в горле"),
    ("кашел", "кашель"),
    ("насморк", "насморк"),
    ("живот", "боль в животе"),
    ("тошн", "тошнота"),
    ("груд", "боль в груди"),
    ("сердц", "учащенное сердцебиение"),
    ("спин", "боль в спине"),
    ("сустав", "боль в суставах"),
    ("сыпь", "сыпь"),
    ("зуд", "зуд"),
    ("глаз", "боль в глазах"),
    ("ухо", "боль в ухе"),
    ("одышк", "одышка"),
];

/// Restate free-text symptoms as canonical complaint names
fn restate_complaints(symptoms: &str) -> Vec<&'static str> {
    let lowered = symptoms.to_lowercase();

    DEMO_COMPLAINTS
        .iter()
        .filter(|(stem, _)| lowered.contains(stem))
        .map(|(_, canonical)| *canonical)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_client() -> ApiClient {
        let mut config = Config::default();
        config.demo_mode = true;
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(&Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert!(!client.is_demo());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:9000/".to_string();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_diagnose_rejects_empty_symptoms() {
        let client = demo_client();
        let result = client.diagnose("   ").await;
        assert!(matches!(result, Err(AssistError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_demo_diagnose_records_consultation() {
        let client = demo_client();

        let response = client.diagnose("болит зуб от холодной воды").await.unwrap();
        assert!(response.diagnosis.contains("Демо-режим"));
        assert!(response.severity.is_some());

        let history = client.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].symptoms, "болит зуб от холодной воды");
    }

    #[tokio::test]
    async fn test_demo_diagnosis_supports_specialist_recommendation() {
        use crate::analysis::SpecialistMatcher;

        let client = demo_client();
        let symptoms = "у меня болит голова и кружится";

        let response = client.diagnose(symptoms).await.unwrap();
        assert!(response.diagnosis.contains("головная боль"));
        assert!(response.diagnosis.contains("головокружение"));

        let matcher = SpecialistMatcher::default();
        let spec = matcher
            .recommend(symptoms, &response.diagnosis)
            .unwrap();
        assert_eq!(spec.code, "neurologist");
    }

    #[test]
    fn test_restate_complaints() {
        assert_eq!(
            restate_complaints("Болит ГОЛОВА и кружится"),
            vec!["головная боль", "головокружение"]
        );
        assert!(restate_complaints("просто устал").is_empty());
    }

    #[tokio::test]
    async fn test_demo_delete_removes_exactly_one() {
        let client = demo_client();

        client.diagnose("кашель").await.unwrap();
        client.diagnose("насморк").await.unwrap();
        client.diagnose("болит горло").await.unwrap();

        let history = client.history().await.unwrap();
        assert_eq!(history.len(), 3);

        let victim = history[1].id.clone();
        client.delete_consultation(&victim).await.unwrap();

        let history = client.history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|c| c.id != victim));
    }

    #[tokio::test]
    async fn test_demo_delete_unknown_id_is_404() {
        let client = demo_client();
        client.diagnose("кашель").await.unwrap();

        let result = client.delete_consultation("no-such-id").await;
        assert!(matches!(
            result,
            Err(AssistError::ApiError { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_demo_clear_empties_history() {
        let client = demo_client();

        client.diagnose("кашель").await.unwrap();
        client.diagnose("насморк").await.unwrap();
        client.clear_history().await.unwrap();

        let history = client.history().await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_demo_history_newest_first() {
        let client = demo_client();

        client.diagnose("первый").await.unwrap();
        client.diagnose("второй").await.unwrap();

        let history = client.history().await.unwrap();
        assert_eq!(history[0].symptoms, "второй");
        assert_eq!(history[1].symptoms, "первый");
    }
}
