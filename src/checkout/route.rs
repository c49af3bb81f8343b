use strum_macros::{Display, EnumIter};

/// The four steps of the checkout. Only the path ever reaches the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Route {
    #[default]
    Landing,
    Confirm,
    Payment,
    Status,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Confirm => "/exchange-confirm",
            Route::Payment => "/payment",
            Route::Status => "/transaction-status",
        }
    }

    /// Unknown paths land on the landing page. Trailing slashes, query and hash are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/exchange-confirm" => Route::Confirm,
            "/payment" => Route::Payment,
            "/transaction-status" => Route::Status,
            _ => Route::Landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_and_decorated_paths() {
        assert_eq!(Route::from_path("/nope"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/payment/"), Route::Payment);
        assert_eq!(Route::from_path("/payment?amount=1"), Route::Payment);
        assert_eq!(Route::from_path("/transaction-status#top"), Route::Status);
    }
}
