use airlabs_client::Client;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, MessageId, ParseMode};
use teloxide::utils::command::BotCommands;

use crate::config::Config;
use crate::handler::{track_flight, Interaction};
use crate::reply::Reply;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Flight tracking commands:")]
pub enum Command {
    #[command(description = "Track a flight by its IATA flight number, e.g. /track AA100")]
    Track(String),
}

/// A `/track` message in a Telegram chat. The typing indicator stands in for
/// the acknowledgment and the follow-up is sent as a reply to the command.
pub struct TelegramInteraction {
    bot: Bot,
    chat_id: ChatId,
    message_id: MessageId,
}

impl TelegramInteraction {
    pub fn new(bot: Bot, msg: &Message) -> Self {
        Self {
            bot,
            chat_id: msg.chat.id,
            message_id: msg.id,
        }
    }
}

#[async_trait]
impl Interaction for TelegramInteraction {
    async fn acknowledge(&self) -> Result<()> {
        self.bot
            .send_chat_action(self.chat_id, ChatAction::Typing)
            .await?;
        Ok(())
    }

    async fn respond(&self, reply: Reply) -> Result<()> {
        let sent = self
            .bot
            .send_message(self.chat_id, reply.to_html())
            .parse_mode(ParseMode::Html)
            .reply_to_message_id(self.message_id)
            .await?;
        tracing::debug!("Sent reply {}", sent.id.0);
        Ok(())
    }
}

pub async fn run(config: Config) -> Result<()> {
    let bot = Bot::new(&config.tg_token);

    let commands = Command::bot_commands();
    bot.set_my_commands(commands.clone()).await?;
    tracing::info!("Synced {} command(s)", commands.len());

    let me = bot.get_me().await?;
    tracing::info!("Logged in as @{}", me.username());

    let client = Arc::new(Client::new(&config.api_url, &config.airlabs_api_key));

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(command_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![client])
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Bot shutdown");
    Ok(())
}

async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    client: Arc<Client>,
) -> ResponseResult<()> {
    match cmd {
        Command::Track(flight_iata) => {
            let interaction = TelegramInteraction::new(bot, &msg);
            if let Err(e) = track_flight(&interaction, &client, &flight_iata).await {
                tracing::error!("Error sending message: {:?}", e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_takes_whole_argument() {
        let cmd = Command::parse("/track aa100", "flight_bot").unwrap();
        assert_eq!(cmd, Command::Track("aa100".to_string()));
    }

    #[test]
    fn only_track_is_registered() {
        let commands = Command::bot_commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].command.ends_with("track"));
    }
}
