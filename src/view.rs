use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::i18n::{self, Lang};
use crate::model::filter_listings;
use crate::pager::{PAGE_SIZE, clamp_page, page_count, page_slice};
use crate::session::Session;

pub const CB_PREV: &str = "pg:prev";
pub const CB_NEXT: &str = "pg:next";
pub const CB_FILTER: &str = "flt:pdf";
pub const CB_LANG_PREFIX: &str = "lang:";

#[derive(Debug, Clone)]
pub struct ResultsView {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
    /// The clamped page index; callers store it back into the session.
    pub page: usize,
}

/// Composes the paged results message for a session with raw listings.
/// Clamping happens here, not at navigation time. An empty filtered set
/// (only reachable with the filter on) renders the "no instructions" text
/// with the nav row absent so the filter can be toggled back.
pub fn render_results(session: &Session, lang: Lang) -> ResultsView {
    let set = session
        .set_num
        .as_ref()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();

    let filtered = filter_listings(&session.listings, session.pdf_only);
    if filtered.is_empty() {
        return ResultsView {
            text: i18n::t_args(lang, "filter-empty", &[("set", &set)]),
            keyboard: InlineKeyboardMarkup::new(vec![
                vec![filter_button(lang, session.pdf_only)],
                lang_row(lang),
            ]),
            page: 0,
        };
    }

    let pages = page_count(filtered.len(), PAGE_SIZE);
    let page = clamp_page(session.page, pages);
    let items = page_slice(&filtered, page, PAGE_SIZE);

    let filter_note = if session.pdf_only {
        i18n::t(lang, "filter-note")
    } else {
        String::new()
    };
    let mut text = i18n::t_args(
        lang,
        "header",
        &[
            ("set", &set),
            ("shown", &items.len().to_string()),
            ("total", &filtered.len().to_string()),
            ("filter", &filter_note),
        ],
    );
    text.push_str("\n\n");

    for (offset, listing) in items.iter().enumerate() {
        let ordinal = page * PAGE_SIZE + offset + 1;
        let parts = listing
            .num_parts
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        let instr = if listing.has_instructions {
            i18n::t(lang, "pdf-available")
        } else {
            i18n::t(lang, "no-instructions")
        };
        text.push_str(&i18n::t_args(
            lang,
            "listing-line",
            &[
                ("i", &ordinal.to_string()),
                ("name", &listing.name),
                ("designer", &listing.designer),
                ("parts", &parts),
                ("instr", &instr),
            ],
        ));
        text.push('\n');
        if let Some(url) = &listing.url {
            text.push_str(url);
            text.push('\n');
        }
        text.push('\n');
    }

    let mut rows = Vec::new();
    let mut nav = Vec::new();
    if page > 0 {
        nav.push(InlineKeyboardButton::callback(
            i18n::t(lang, "btn-prev"),
            CB_PREV,
        ));
    }
    if page + 1 < pages {
        nav.push(InlineKeyboardButton::callback(
            i18n::t(lang, "btn-next"),
            CB_NEXT,
        ));
    }
    if !nav.is_empty() {
        rows.push(nav);
    }
    rows.push(vec![filter_button(lang, session.pdf_only)]);
    rows.push(lang_row(lang));

    ResultsView {
        text: text.trim_end().to_string(),
        keyboard: InlineKeyboardMarkup::new(rows),
        page,
    }
}

pub fn help_view(lang: Lang) -> (String, InlineKeyboardMarkup) {
    (
        i18n::t(lang, "help"),
        InlineKeyboardMarkup::new(vec![lang_row(lang)]),
    )
}

pub fn language_view(lang: Lang) -> (String, InlineKeyboardMarkup) {
    (
        i18n::t(lang, "choose-lang"),
        InlineKeyboardMarkup::new(vec![lang_row(lang)]),
    )
}

fn filter_button(lang: Lang, pdf_only: bool) -> InlineKeyboardButton {
    let key = if pdf_only {
        "btn-filter-off"
    } else {
        "btn-filter-on"
    };
    InlineKeyboardButton::callback(i18n::t(lang, key), CB_FILTER)
}

fn lang_row(lang: Lang) -> Vec<InlineKeyboardButton> {
    vec![
        InlineKeyboardButton::callback(
            i18n::t(lang, "btn-lang-en"),
            format!("{CB_LANG_PREFIX}en"),
        ),
        InlineKeyboardButton::callback(
            i18n::t(lang, "btn-lang-ru"),
            format!("{CB_LANG_PREFIX}ru"),
        ),
    ]
}
