use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported display languages. [`Lang::En`] is the fallback for users who
/// never picked one and for unknown tags in the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

pub const DEFAULT_LANG: Lang = Lang::En;
pub const SUPPORTED_LANGS: &[Lang] = &[Lang::En, Lang::Ru];

impl Lang {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }
}

const EN: &[(&str, &str)] = &[
    (
        "help",
        "Hi! I am the LEGO alternate builds bot.\n\n\
         Commands:\n\
         /alts <set number> - show alternate builds for a set\n\
         /language - choose a language\n\
         Example: /alts 77244-1",
    ),
    ("prompt-set", "Send me a set number: /alts 77244-1"),
    (
        "bad-format",
        "I need the full set number, e.g. 77244-1 (with the \"-1\").",
    ),
    ("not-found", "No alternate builds found for set {set}."),
    ("fetch-error", "Rebrickable request failed: {cause}"),
    (
        "filter-empty",
        "None of the alternate builds for {set} come with building instructions.",
    ),
    ("header", "Alternate builds for {set}: {shown} of {total}{filter}"),
    ("filter-note", " (PDF only)"),
    ("listing-line", "{i}) {name} — {designer} ({parts} parts) {instr}"),
    ("pdf-available", "📄 PDF available"),
    ("no-instructions", "💰 No instructions"),
    ("btn-prev", "⬅️ Prev"),
    ("btn-next", "Next ➡️"),
    ("btn-filter-on", "📄 Only with PDF"),
    ("btn-filter-off", "📦 Show all"),
    ("btn-lang-en", "🇬🇧 English"),
    ("btn-lang-ru", "🇷🇺 Русский"),
    ("choose-lang", "Choose a language:"),
    ("lang-saved", "Language saved: English"),
];

const RU: &[(&str, &str)] = &[
    (
        "help",
        "Привет! Я бот альтернативных моделей LEGO.\n\n\
         Команды:\n\
         /alts <номер набора> - показать альтернативные модели\n\
         /language - выбрать язык\n\
         Пример: /alts 77244-1",
    ),
    ("prompt-set", "Напиши номер набора: /alts 77244-1"),
    (
        "bad-format",
        "Нужен полный формат, например 77244-1 (с «-1»).",
    ),
    (
        "not-found",
        "Для набора {set} альтернативные модели не найдены.",
    ),
    ("fetch-error", "Ошибка при запросе к API: {cause}"),
    (
        "filter-empty",
        "У альтернативных моделей набора {set} нет инструкций.",
    ),
    (
        "header",
        "Альтернативные модели для {set}: {shown} из {total}{filter}",
    ),
    ("filter-note", " (только с PDF)"),
    ("listing-line", "{i}) {name} — {designer} ({parts} деталей) {instr}"),
    ("pdf-available", "📄 Есть PDF"),
    ("no-instructions", "💰 Без инструкций"),
    ("btn-prev", "⬅️ Назад"),
    ("btn-next", "Вперёд ➡️"),
    ("btn-filter-on", "📄 Только с PDF"),
    ("btn-filter-off", "📦 Показать все"),
    ("btn-lang-en", "🇬🇧 English"),
    ("btn-lang-ru", "🇷🇺 Русский"),
    ("choose-lang", "Выберите язык:"),
    ("lang-saved", "Язык сохранён: русский"),
];

fn catalog_for(lang: Lang) -> &'static HashMap<&'static str, &'static str> {
    static EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static RU_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match lang {
        Lang::En => EN_MAP.get_or_init(|| EN.iter().copied().collect()),
        Lang::Ru => RU_MAP.get_or_init(|| RU.iter().copied().collect()),
    }
}

/// Resolves a catalog key for a language. Unknown keys fall back to English
/// and then to the key itself, never an error.
pub fn t(lang: Lang, key: &str) -> String {
    t_args(lang, key, &[])
}

/// Same as [`t`] with `{name}` placeholder substitution. A placeholder with
/// no matching argument is left in place rather than failing the render.
pub fn t_args(lang: Lang, key: &str, args: &[(&str, &str)]) -> String {
    let mut out = lookup(lang, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn lookup<'a>(lang: Lang, key: &'a str) -> &'a str {
    catalog_for(lang)
        .get(key)
        .or_else(|| catalog_for(DEFAULT_LANG).get(key))
        .copied()
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_define_the_same_keys() {
        let en: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
        let ru: Vec<&str> = RU.iter().map(|(k, _)| *k).collect();
        for key in &en {
            assert!(ru.contains(key), "ru catalog missing {key}");
        }
        for key in &ru {
            assert!(en.contains(key), "en catalog missing {key}");
        }
    }

    #[test]
    fn resolve_never_fails_for_any_supported_lang() {
        for lang in SUPPORTED_LANGS {
            for (key, _) in EN {
                let resolved = t(*lang, key);
                assert!(!resolved.is_empty());
                assert_ne!(resolved, *key, "{} fell through for {}", key, lang.as_str());
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        assert_eq!(t(Lang::Ru, "no-such-key"), "no-such-key");
    }

    #[test]
    fn args_are_substituted_by_name() {
        let text = t_args(Lang::En, "not-found", &[("set", "77244-1")]);
        assert_eq!(text, "No alternate builds found for set 77244-1.");
    }

    #[test]
    fn missing_arg_leaves_placeholder_in_place() {
        let text = t_args(Lang::En, "not-found", &[]);
        assert!(text.contains("{set}"));
    }

    #[test]
    fn lang_parse_round_trips_and_rejects_unknown() {
        for lang in SUPPORTED_LANGS {
            assert_eq!(Lang::parse(lang.as_str()), Some(*lang));
        }
        assert_eq!(Lang::parse("RU"), Some(Lang::Ru));
        assert_eq!(Lang::parse("de"), None);
    }
}
