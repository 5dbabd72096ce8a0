use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    NewFile,
    Modified,
    Install,
    Update,
    Backport,
    Doctor,
    List,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::NewFile) => theme::icons::NEW_FILE,
            (true, Icon::Modified) => theme::icons::MODIFIED,
            (true, Icon::Install) => theme::icons::INSTALL,
            (true, Icon::Update) => theme::icons::UPDATE,
            (true, Icon::Backport) => theme::icons::BACKPORT,
            (true, Icon::Doctor) => theme::icons::DOCTOR,
            (true, Icon::List) => theme::icons::LIST,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::NewFile) => theme::icons_ascii::NEW_FILE,
            (false, Icon::Modified) => theme::icons_ascii::MODIFIED,
            (false, Icon::Install) => theme::icons_ascii::INSTALL,
            (false, Icon::Update) => theme::icons_ascii::UPDATE,
            (false, Icon::Backport) => theme::icons_ascii::BACKPORT,
            (false, Icon::Doctor) => theme::icons_ascii::DOCTOR,
            (false, Icon::List) => theme::icons_ascii::LIST,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::NewFile => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Modified => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Install | Icon::Update | Icon::Backport | Icon::Doctor | Icon::List => {
                theme::colors::INFO
            }
        };
        format!("{}", s.with(color))
    }
}
