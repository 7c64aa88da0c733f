#[cfg(feature = "lambda")]
use astro_insights::utils::logger;
#[cfg(feature = "lambda")]
use astro_insights::{PredictionResponse, Predictor};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Deserialize;

/// Event body: both fields are optional so a missing one is reported as a bad request
/// instead of a deserialization failure.
#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub name: Option<String>,
    pub dob: Option<String>,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<PredictionResponse, Error> {
    tracing::info!("Handling prediction request {}", event.context.request_id);

    let predictor = Predictor::new();
    let payload = event.payload;

    match predictor.predict_raw(payload.name.as_deref(), payload.dob.as_deref()) {
        Ok(response) => {
            tracing::info!("Composed reading for sign {}", response.sign);
            Ok(response)
        }
        Err(e) if e.is_bad_request() => {
            tracing::warn!("Rejected request: {}", e);
            Err(format!("Bad request: {}", e).into())
        }
        Err(e) => {
            tracing::error!("Prediction failed: {} (Severity: {:?})", e, e.severity());
            Err(e.into())
        }
    }
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
