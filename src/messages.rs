//! User-facing diagnostic strings, one table per locale.
//!
//! Russian is the default; the launcher ships to Russian-speaking users.

use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Parse a language tag such as `ru`, `en`, `en_US.UTF-8`. Unknown tags map to `Ru`.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .trim()
            .split(|c: char| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or_default();
        if lang.eq_ignore_ascii_case("en") {
            Locale::En
        } else {
            Locale::Ru
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}

pub struct Messages {
    path_resolution: &'static str,
    script_not_found: &'static str,
    interpreter_not_found: &'static str,
    child_failed: &'static str,
}

static RU: Messages = Messages {
    path_resolution: "Не удалось определить путь к exe",
    script_not_found: "Не найден скрипт бота",
    interpreter_not_found: "Не удалось найти интерпретатор Python. Установите Python 3.11+ или добавьте python.exe рядом с программой.",
    child_failed: "Ошибка запуска python скрипта",
};

static EN: Messages = Messages {
    path_resolution: "Could not determine the path to the executable",
    script_not_found: "Bot script not found",
    interpreter_not_found: "Could not find a Python interpreter. Install Python 3.11+ or put python.exe next to the program.",
    child_failed: "Failed to run the python script",
};

impl Messages {
    pub fn path_resolution(&self, err: impl Display) -> String {
        format!("{}: {}", self.path_resolution, err)
    }

    pub fn script_not_found(&self, path: &Path) -> String {
        format!("{}: {}", self.script_not_found, path.display())
    }

    pub fn interpreter_not_found(&self) -> &'static str {
        self.interpreter_not_found
    }

    pub fn child_failed(&self, err: impl Display) -> String {
        format!("{}: {}", self.child_failed, err)
    }
}
