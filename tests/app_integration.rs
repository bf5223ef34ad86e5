use std::io::Cursor;

use tracing::{error, info};

use fxconv::cli::session::Session;
use fxconv::core::currency::Currency;
use fxconv::core::rate::RateProvider;
use fxconv::providers::exchange_rate_api::ExchangeRateApiProvider;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const API_KEY: &str = "test-key";

    pub async fn create_pair_mock_server(
        base: &str,
        target: &str,
        response: ResponseTemplate,
    ) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/{API_KEY}/pair/{base}/{target}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }
}

async fn run_scripted_session(script: &str, provider: &ExchangeRateApiProvider) -> String {
    let mut out = Vec::new();
    Session::new(Cursor::new(script.to_string()), &mut out, provider)
        .run()
        .await
        .expect("session should not fail");
    String::from_utf8(out).expect("session output should be UTF-8")
}

#[test_log::test(tokio::test)]
async fn test_full_session_flow_with_mock() {
    let mock_response = r#"{"result": "success", "conversion_rate": 4000.0}"#;
    let mock_server = test_utils::create_pair_mock_server(
        "USD",
        "COP",
        wiremock::ResponseTemplate::new(200).set_body_string(mock_response),
    )
    .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri(), test_utils::API_KEY);
    let output = run_scripted_session("1\n25\n0\n", &provider).await;

    assert!(output.contains("Tasa USD (Dólar) -> COP (Peso colombiano): 4000.000000"));
    assert!(output.contains("25,00 (Dólares) USD equivalen a 100.000,00 (Pesos colombianos) COP"));
    assert!(output.contains("¡Hasta pronto!"));
}

#[test_log::test(tokio::test)]
async fn test_session_survives_http_failure() {
    let mock_server = test_utils::create_pair_mock_server(
        "USD",
        "COP",
        wiremock::ResponseTemplate::new(503),
    )
    .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri(), test_utils::API_KEY);
    let output = run_scripted_session("1\n10\n0\n", &provider).await;

    assert!(output.contains("Error realizando la conversión: HTTP 503"));
    // The menu comes back after the failure.
    assert_eq!(output.matches("Elige una opción:").count(), 2);
    assert!(output.contains("¡Hasta pronto!"));
}

#[test_log::test(tokio::test)]
async fn test_session_survives_api_level_failure() {
    let mock_response = r#"{"result": "error", "error-type": "invalid-key"}"#;
    let mock_server = test_utils::create_pair_mock_server(
        "USD",
        "COP",
        wiremock::ResponseTemplate::new(200).set_body_string(mock_response),
    )
    .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri(), test_utils::API_KEY);
    let output = run_scripted_session("1\n10\n0\n", &provider).await;

    assert!(output.contains("Error realizando la conversión: respuesta inválida de la API"));
    assert!(output.contains("invalid-key"));
    assert_eq!(output.matches("Elige una opción:").count(), 2);
}

#[test_log::test(tokio::test)]
async fn test_invalid_custom_code_never_reaches_the_network() {
    let mock_server = wiremock::MockServer::start().await;
    let provider = ExchangeRateApiProvider::new(&mock_server.uri(), test_utils::API_KEY);

    let output = run_scripted_session("7\nxyz\ncop\n0\n", &provider).await;

    assert!(output.contains("Código no permitido. Usa los listados mostrados."));
    assert!(!output.contains("Ingresa el monto"));
    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(requests.is_empty(), "no request should have been issued");
}

#[test_log::test(tokio::test)]
async fn test_latest_table_fetch_with_mock() {
    let mock_response = r#"{
        "result": "success",
        "conversion_rates": {"USD": 1.0, "COP": 3900.12, "BOB": 6.91}
    }"#;
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(format!(
            "/{}/latest/USD",
            test_utils::API_KEY
        )))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(mock_response))
        .mount(&mock_server)
        .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri(), test_utils::API_KEY);
    let table = provider.latest_table(Currency::USD).await.unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table["BOB"], 6.91);
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live exchangerate-api.com endpoint, needs EXCHANGE_RATE_API_KEY"]
async fn test_real_pair_rate_api() {
    let api_key = std::env::var("EXCHANGE_RATE_API_KEY").expect("API key must be set");
    let provider =
        ExchangeRateApiProvider::new("https://v6.exchangerate-api.com/v6", &api_key);

    info!("Fetching USD -> COP rate from exchangerate-api.com");
    match provider.pair_rate(Currency::USD, Currency::COP).await {
        Ok(rate) => {
            info!(?rate, "Received successful pair rate response");
            assert!(rate > 0.0, "Pair rate should be positive");
        }
        Err(e) => {
            error!("Pair rate API request failed: {e}\n{e:?}");
            panic!("Pair rate API request failed: {e}");
        }
    }
}
