use std::sync::Arc;

use hr_assistant::api::{AppState, create_router};
use hr_assistant::config::ConfigLoader;
use hr_assistant::llm::{ChatModel, OpenAiCompatibleClient};
use hr_assistant::relay::ChatRelay;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_assistant=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ConfigLoader::from_env()?.into_settings();

    // A provider that cannot be built leaves the assistant running unconfigured
    let model: Option<Arc<dyn ChatModel>> = match settings.provider.api_key.as_deref() {
        Some(api_key) => match OpenAiCompatibleClient::new(api_key, &settings.provider) {
            Ok(client) => {
                tracing::info!(
                    model = %client.model(),
                    endpoint = %client.endpoint(),
                    "Model provider configured"
                );
                let client: Arc<dyn ChatModel> = Arc::new(client);
                Some(client)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to build provider client; AI disabled");
                None
            }
        },
        None => {
            tracing::warn!("GROQ_API_KEY not set; AI disabled");
            None
        }
    };

    tracing::info!(
        default_month = %settings.policy.default_month,
        sick_leave_quota = settings.policy.sick_leave_quota,
        paid_leave_quota = settings.policy.paid_leave_quota,
        team_member_limit = settings.policy.team_member_limit,
        "Lookup policy loaded"
    );

    let relay = ChatRelay::from_settings(model, &settings);
    let state = AppState::new(relay, settings.frontend.dist_dir.clone());
    let app = create_router(state);

    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("HR assistant listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
