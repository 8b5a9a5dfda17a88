use std::sync::Arc;

use teloxide::prelude::*;

use crate::errors::BotError;
use crate::i18n::{self, Lang};
use crate::state::AppState;
use crate::view::{self, CB_FILTER, CB_LANG_PREFIX, CB_NEXT, CB_PREV};

enum NavOp {
    Prev,
    Next,
    ToggleFilter,
}

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> Result<(), BotError> {
    let user_id = q.from.id.0;
    let lang = state.lang_for(user_id);

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    if let Some(tag) = data.strip_prefix(CB_LANG_PREFIX) {
        let tag = tag.to_string();
        return handle_language_select(bot, q, state, user_id, lang, &tag).await;
    }

    let op = match data.as_str() {
        CB_PREV => NavOp::Prev,
        CB_NEXT => NavOp::Next,
        CB_FILTER => NavOp::ToggleFilter,
        _ => {
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    let view = {
        let mut sessions = state.sessions.lock().await;
        match sessions.get_mut(&user_id) {
            Some(session) if session.has_results() => {
                match op {
                    // Unclamped here; the render step clamps and the result
                    // is written back.
                    NavOp::Prev => session.page = session.page.saturating_sub(1),
                    NavOp::Next => session.page += 1,
                    NavOp::ToggleFilter => session.toggle_filter(),
                }
                let view = view::render_results(session, lang);
                session.page = view.page;
                Some(view)
            }
            _ => None,
        }
    };

    match view {
        Some(view) => {
            if let Some(message) = q.message.clone() {
                bot.edit_message_text(message.chat.id, message.id, view.text)
                    .reply_markup(view.keyboard)
                    .await?;
            }
            bot.answer_callback_query(q.id).await?;
        }
        None => {
            // Stale press, e.g. a button on a message that outlived a
            // restart. Degrade to the help view instead of failing.
            bot.answer_callback_query(q.id).await?;
            if let Some(message) = q.message.clone() {
                let (help, keyboard) = view::help_view(lang);
                bot.edit_message_text(message.chat.id, message.id, help)
                    .reply_markup(keyboard)
                    .await?;
            }
        }
    }
    Ok(())
}

async fn handle_language_select(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
    user_id: u64,
    old_lang: Lang,
    tag: &str,
) -> Result<(), BotError> {
    let Some(new_lang) = Lang::parse(tag) else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    state.prefs.set(user_id, new_lang)?;
    bot.answer_callback_query(q.id)
        .text(i18n::t(new_lang, "lang-saved"))
        .await?;

    // Re-rendering an unchanged message would be rejected by Telegram.
    if new_lang != old_lang {
        if let Some(message) = q.message.clone() {
            let (help, keyboard) = view::help_view(new_lang);
            bot.edit_message_text(message.chat.id, message.id, help)
                .reply_markup(keyboard)
                .await?;
        }
    }
    Ok(())
}
