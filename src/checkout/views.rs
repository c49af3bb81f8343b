use {
    crate::{
        checkout::Route,
        config::{PRICING, RATES},
        domain::{ExchangeSession, ExchangeSessionPatch, Quote, parse_fiat_amount},
        session::{KeyValueStore, SessionStore},
        utils::{now_local, now_timestamp_ms, transaction_id},
    },
    chrono::{DateTime, Local},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Whether the landing page may move on with this amount.
pub fn can_proceed(input: &str) -> bool {
    parse_fiat_amount(input) >= PRICING.min_fiat_amount
}

/// Record a fresh exchange from the landing page and move to confirmation.
/// Returns `None` (stay put) when the amount is under the minimum.
pub fn start_exchange<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    input: &str,
    quote: &Quote,
) -> Option<Route> {
    if !can_proceed(input) {
        return None;
    }
    let session = ExchangeSession::new(input.trim(), quote.output_display(), quote.base_rate)
        .with_effective_rate(quote.effective_rate);
    store.set(session);
    Some(Route::Confirm)
}

/// Drop the current exchange and go back to the start.
pub fn start_new_exchange<S: KeyValueStore>(store: &mut SessionStore<S>) -> Route {
    store.clear();
    Route::Landing
}

fn require_session<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    _route: Route,
) -> Result<ExchangeSession, Route> {
    match store.get() {
        Some(session) => Ok(session),
        None => {
            #[cfg(debug_assertions)]
            if DF.log_navigation {
                log::info!("No exchange in progress, {} redirects to landing", _route);
            }
            Err(Route::Landing)
        }
    }
}

/// Contact details form on the confirmation step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmForm {
    pub email: String,
    pub wallet_address: String,
    /// Shown, never enforced.
    pub agreed: bool,
    submitted: bool,
}

impl ConfirmForm {
    pub fn prefilled(session: &ExchangeSession) -> Self {
        Self {
            email: session.email.clone().unwrap_or_default(),
            wallet_address: session.wallet_address.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn wallet_missing(&self) -> bool {
        self.wallet_address.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.wallet_missing()
    }

    /// Inline "required" marker: shown while the field is empty, or after a
    /// rejected submit of a blank value.
    pub fn show_wallet_error(&self) -> bool {
        self.wallet_address.is_empty() || (self.submitted && self.wallet_missing())
    }

    /// Merge the contact details into the session and move on to payment.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut SessionStore<S>) -> Option<Route> {
        self.submitted = true;
        if self.wallet_missing() {
            return None;
        }
        let email = self.email.trim();
        let patch = ExchangeSessionPatch {
            email: (!email.is_empty()).then(|| email.to_string()),
            wallet_address: Some(self.wallet_address.trim().to_string()),
            ..Default::default()
        };
        if !store.update(patch) {
            log::warn!("Contact details not saved: no exchange in memory");
        }
        Some(Route::Payment)
    }
}

pub struct ConfirmView {
    pub session: ExchangeSession,
    pub form: ConfirmForm,
}

impl ConfirmView {
    pub fn load<S: KeyValueStore>(store: &mut SessionStore<S>) -> Result<Self, Route> {
        let session = require_session(store, Route::Confirm)?;
        Ok(Self {
            form: ConfirmForm::prefilled(&session),
            session,
        })
    }

    pub fn quoted_rate(&self) -> f64 {
        self.session.quoted_rate()
    }
}

pub struct PaymentView {
    pub session: ExchangeSession,
}

impl PaymentView {
    pub fn load<S: KeyValueStore>(store: &mut SessionStore<S>) -> Result<Self, Route> {
        require_session(store, Route::Payment).map(|session| Self { session })
    }

    /// Fiat amount the customer has to send.
    pub fn amount_due(&self) -> &str {
        &self.session.from_amount
    }

    pub fn confirm_transfer(&self) -> Route {
        Route::Status
    }
}

pub struct StatusView {
    pub session: ExchangeSession,
    pub transaction_id: String,
    pub started_at: DateTime<Local>,
}

impl StatusView {
    /// Transaction id and timestamp are fixed here, on entry.
    pub fn load<S: KeyValueStore>(store: &mut SessionStore<S>) -> Result<Self, Route> {
        let session = require_session(store, Route::Status)?;
        Ok(Self {
            session,
            transaction_id: transaction_id(now_timestamp_ms()),
            started_at: now_local(),
        })
    }

    /// Final, then bonus, then base rate; the fallback constant if none is usable.
    pub fn display_rate(&self) -> f64 {
        let rate = self.session.display_rate();
        if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            RATES.fallback_rate
        }
    }

    pub fn display_amount(&self) -> &str {
        self.session.display_amount()
    }

    pub fn wallet_address(&self) -> &str {
        self.session.wallet_address.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::quote_from_input, session::MemoryStore};

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn minimum_amount_gates_proceed() {
        assert!(can_proceed("22000"));
        assert!(can_proceed(" 50000 "));
        assert!(!can_proceed("21999.99"));
        assert!(!can_proceed(""));
        assert!(!can_proceed("abc"));
    }

    #[test]
    fn start_exchange_writes_the_quote() {
        let mut store = store();
        let quote = quote_from_input("22000", RATES.fallback_rate);
        assert_eq!(start_exchange(&mut store, "22000", &quote), Some(Route::Confirm));

        let session = store.get().unwrap();
        assert_eq!(session.from_amount, "22000");
        assert_eq!(session.to_amount, "46.90");
        assert_eq!(session.exchange_rate, 478.5);
        assert_eq!(session.effective_rate, Some(quote.effective_rate));
        assert_eq!(session.wallet_address, None);
    }

    #[test]
    fn start_exchange_below_minimum_stays() {
        let mut store = store();
        let quote = quote_from_input("1000", RATES.fallback_rate);
        assert_eq!(start_exchange(&mut store, "1000", &quote), None);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn checkout_steps_redirect_without_session() {
        let mut store = store();
        assert_eq!(ConfirmView::load(&mut store).err(), Some(Route::Landing));
        assert_eq!(PaymentView::load(&mut store).err(), Some(Route::Landing));
        assert_eq!(StatusView::load(&mut store).err(), Some(Route::Landing));
    }

    #[test]
    fn confirm_requires_wallet() {
        let mut store = store();
        let quote = quote_from_input("30000", 480.0);
        start_exchange(&mut store, "30000", &quote);

        let mut view = ConfirmView::load(&mut store).unwrap();
        assert!(view.form.wallet_missing());
        assert!(view.form.show_wallet_error());

        view.form.wallet_address = "   ".into();
        assert!(!view.form.show_wallet_error());
        assert_eq!(view.form.submit(&mut store), None);
        assert!(view.form.show_wallet_error());
        assert_eq!(store.get().unwrap().wallet_address, None);
    }

    #[test]
    fn confirm_merges_contact_details() {
        let mut store = store();
        let quote = quote_from_input("30000", 480.0);
        start_exchange(&mut store, "30000", &quote);

        let mut view = ConfirmView::load(&mut store).unwrap();
        view.form.email = " a@b.kz ".into();
        view.form.wallet_address = " TXYZ123 ".into();
        assert_eq!(view.form.submit(&mut store), Some(Route::Payment));

        let session = store.get().unwrap();
        assert_eq!(session.email.as_deref(), Some("a@b.kz"));
        assert_eq!(session.wallet_address.as_deref(), Some("TXYZ123"));
        assert_eq!(session.from_amount, "30000");
    }

    #[test]
    fn empty_email_is_left_out() {
        let mut store = store();
        let quote = quote_from_input("30000", 480.0);
        start_exchange(&mut store, "30000", &quote);

        let mut view = ConfirmView::load(&mut store).unwrap();
        view.form.wallet_address = "T1".into();
        view.form.submit(&mut store);
        assert_eq!(store.get().unwrap().email, None);
    }

    #[test]
    fn status_prefers_final_values() {
        let mut store = store();
        let mut session = ExchangeSession::new("22000", "46.90", 478.5).with_effective_rate(469.12);
        session.final_rate = Some(470.0);
        session.final_amount = Some("46.80".into());
        store.set(session);

        let view = StatusView::load(&mut store).unwrap();
        assert_eq!(view.display_rate(), 470.0);
        assert_eq!(view.display_amount(), "46.80");
        assert!(view.transaction_id.starts_with("TX"));
        assert_eq!(view.transaction_id.len(), 10);
    }

    #[test]
    fn status_rate_falls_back_when_missing() {
        let mut store = store();
        store.set(ExchangeSession::new("22000", "0.00", 0.0));
        let view = StatusView::load(&mut store).unwrap();
        assert_eq!(view.display_rate(), RATES.fallback_rate);
        assert_eq!(view.wallet_address(), "");
    }

    #[test]
    fn new_exchange_clears_everything() {
        let mut store = store();
        store.set(ExchangeSession::new("22000", "46.90", 478.5));
        assert_eq!(start_new_exchange(&mut store), Route::Landing);
        assert_eq!(store.get(), None);
        assert_eq!(ConfirmView::load(&mut store).err(), Some(Route::Landing));
    }
}
