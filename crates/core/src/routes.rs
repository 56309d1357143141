//! Client-facing routes. Merchants only change labeling; they never reach
//! the invoice request.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merchant {
    CosmicGaming,
    SkieeGaming,
}

impl Merchant {
    pub const ALL: [Merchant; 2] = [Merchant::CosmicGaming, Merchant::SkieeGaming];

    /// Path segment the merchant page is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Merchant::CosmicGaming => "cosmic-gaming",
            Merchant::SkieeGaming => "skiee-gaming",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Merchant::CosmicGaming => "cosmic_gaming",
            Merchant::SkieeGaming => "skiee_gaming",
        }
    }

    /// Display label: the slug with its first underscore turned into a space.
    pub fn label(&self) -> String {
        self.slug().replacen('_', " ", 1)
    }
}

impl fmt::Display for Merchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, no merchant branding
    Home,
    Merchant(Merchant),
    NotFound,
}

impl Route {
    /// Paths match case-insensitively; query and fragment are ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return Route::Home;
        }
        Merchant::ALL
            .into_iter()
            .find(|m| m.path().eq_ignore_ascii_case(path))
            .map_or(Route::NotFound, Route::Merchant)
    }

    pub fn merchant(&self) -> Option<Merchant> {
        match self {
            Route::Merchant(m) => Some(*m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(
            Route::resolve("/cosmic-gaming"),
            Route::Merchant(Merchant::CosmicGaming)
        );
        assert_eq!(
            Route::resolve("/skiee-gaming/?ref=x"),
            Route::Merchant(Merchant::SkieeGaming)
        );
    }

    #[test]
    fn paths_ignore_case() {
        assert_eq!(
            Route::resolve("/Cosmic-Gaming"),
            Route::Merchant(Merchant::CosmicGaming)
        );
        assert_eq!(
            Route::resolve("/SKIEE-GAMING/"),
            Route::Merchant(Merchant::SkieeGaming)
        );
        assert_eq!(Route::resolve("/Cosmic_Gaming"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::resolve("/nope"), Route::NotFound);
        assert_eq!(Route::resolve("/cosmic-gaming/extra"), Route::NotFound);
        assert_eq!(Route::NotFound.merchant(), None);
    }

    #[test]
    fn merchant_label_replaces_underscore() {
        assert_eq!(Merchant::CosmicGaming.label(), "cosmic gaming");
        assert_eq!(Merchant::SkieeGaming.label(), "skiee gaming");
    }
}
