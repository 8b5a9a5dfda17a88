use std::sync::Arc;

use teloxide::prelude::*;

use crate::config::FETCH_LIMIT;
use crate::errors::BotError;
use crate::i18n::{self, Lang};
use crate::model::SetNum;
use crate::state::AppState;
use crate::view;

pub async fn handle_message(
    bot: Bot,
    msg: Message,
    state: Arc<AppState>,
) -> Result<(), BotError> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0;
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.to_string();
    let lang = state.lang_for(user_id);

    if let Some(cmd) = parse_command(&text) {
        let rest = text
            .splitn(2, char::is_whitespace)
            .nth(1)
            .unwrap_or("")
            .trim()
            .to_string();
        match cmd {
            "alts" => handle_alts_command(&bot, &msg, &state, user_id, lang, &rest).await?,
            "language" => {
                let (prompt, keyboard) = view::language_view(lang);
                bot.send_message(msg.chat.id, prompt)
                    .reply_markup(keyboard)
                    .await?;
            }
            // /start, /help and anything unrecognized all land on the help text.
            _ => {
                let (help, keyboard) = view::help_view(lang);
                bot.send_message(msg.chat.id, help)
                    .reply_markup(keyboard)
                    .await?;
            }
        }
        return Ok(());
    }

    // Free text only matters while a set number is expected; the flag is
    // consumed either way.
    let awaiting = {
        let mut sessions = state.sessions.lock().await;
        let session = sessions.entry(user_id).or_default();
        let awaiting = session.awaiting_set_num;
        session.awaiting_set_num = false;
        awaiting
    };
    if !awaiting {
        return Ok(());
    }

    match SetNum::parse(&text) {
        Some(set_num) => run_query(&bot, msg.chat.id, &state, user_id, lang, set_num).await?,
        None => {
            bot.send_message(msg.chat.id, i18n::t(lang, "bad-format"))
                .await?;
        }
    }
    Ok(())
}

async fn handle_alts_command(
    bot: &Bot,
    msg: &Message,
    state: &Arc<AppState>,
    user_id: u64,
    lang: Lang,
    rest: &str,
) -> Result<(), BotError> {
    if rest.is_empty() {
        {
            let mut sessions = state.sessions.lock().await;
            sessions.entry(user_id).or_default().awaiting_set_num = true;
        }
        bot.send_message(msg.chat.id, i18n::t(lang, "prompt-set"))
            .await?;
        return Ok(());
    }

    let Some(set_num) = SetNum::parse(rest) else {
        // Rejected before any network call; the session is untouched.
        bot.send_message(msg.chat.id, i18n::t(lang, "bad-format"))
            .await?;
        return Ok(());
    };
    run_query(bot, msg.chat.id, state, user_id, lang, set_num).await
}

pub(crate) async fn run_query(
    bot: &Bot,
    chat_id: ChatId,
    state: &Arc<AppState>,
    user_id: u64,
    lang: Lang,
    set_num: SetNum,
) -> Result<(), BotError> {
    match state.api.fetch_alternates(&set_num, FETCH_LIMIT).await {
        Ok(listings) if listings.is_empty() => {
            {
                let mut sessions = state.sessions.lock().await;
                sessions.entry(user_id).or_default().clear_results();
            }
            bot.send_message(
                chat_id,
                i18n::t_args(lang, "not-found", &[("set", set_num.as_str())]),
            )
            .await?;
        }
        Ok(listings) => {
            let view = {
                let mut sessions = state.sessions.lock().await;
                let session = sessions.entry(user_id).or_default();
                session.start_results(set_num, listings);
                let view = view::render_results(session, lang);
                session.page = view.page;
                view
            };
            bot.send_message(chat_id, view.text)
                .reply_markup(view.keyboard)
                .await?;
        }
        Err(err) => {
            // Session stays in its prior state; the raw cause is shown.
            log::warn!("fetch failed for {set_num}: {err}");
            bot.send_message(
                chat_id,
                i18n::t_args(lang, "fetch-error", &[("cause", &err.to_string())]),
            )
            .await?;
        }
    }
    Ok(())
}

fn parse_command(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let cmd = first.strip_prefix('/')?;
    Some(cmd.split('@').next().unwrap_or(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_strips_slash_and_bot_suffix() {
        assert_eq!(parse_command("/alts 77244-1"), Some("alts"));
        assert_eq!(parse_command("/alts@brickalts_bot 77244-1"), Some("alts"));
        assert_eq!(parse_command("/start"), Some("start"));
    }

    #[test]
    fn parse_command_ignores_plain_text() {
        assert_eq!(parse_command("77244-1"), None);
        assert_eq!(parse_command("  "), None);
    }
}
