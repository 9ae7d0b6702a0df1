use std::future::IntoFuture;
use std::net::SocketAddr;

use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::Bot;

use crate::config::AppConfig;
use crate::error::{BotError, BotResult};
use crate::handler::get_handler;
use crate::server::health_router;
use crate::state::AppState;
use crate::utils::http;

pub struct BotService {
    pub bot: Bot,
    pub state: AppState,
}

impl BotService {
    pub async fn new(config: &AppConfig) -> BotResult<Self> {
        info!("Initializing AppState...");
        let state = AppState::new(config).await?;
        info!("AppState initialized");

        let client = http::create_telegram_client().map_err(|e| BotError::Other(e.into()))?;
        let bot = Bot::with_client(config.telegram.0.clone(), client);

        Ok(Self { bot, state })
    }

    pub async fn start(&self) -> BotResult<()> {
        info!("Testing connection to Telegram API...");
        match self.bot.get_me().await {
            Ok(me) => info!("Successfully connected to Telegram API as @{}", me.username()),
            Err(e) => {
                error!("Failed to connect to Telegram API: {:?}", e);
                return Err(anyhow::anyhow!("Failed to connect to Telegram API: {}", e).into());
            }
        }

        if let Err(e) = crate::command::setup_user_commands(&self.bot, self.state.translator.as_ref()).await {
            warn!("Failed to publish the command menu: {}", e);
        }

        Dispatcher::builder(self.bot.clone(), get_handler())
            .dependencies(dptree::deps![
                self.state.sessions.clone(),
                self.state.conversation.clone()
            ])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }

    /// Runs the dispatcher and the health endpoint until either stops.
    pub async fn serve(&self, addr: SocketAddr) -> BotResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| BotError::Other(e.into()))?;
        info!("Health endpoint listening on {}", addr);

        let server = axum::serve(listener, health_router()).into_future();

        tokio::select! {
            result = self.start() => result,
            result = server => {
                error!("Health endpoint stopped");
                result.map_err(|e| BotError::Other(e.into()))
            }
        }
    }
}
