use almasu::{
    checkout::{
        ConfirmForm, ConfirmView, PaymentView, Route, StatusView, start_exchange,
        start_new_exchange,
    },
    config::PERSISTENCE,
    domain::quote_from_input,
    session::{KeyValueStore, MemoryStore, SessionStore},
};

const RATE: f64 = 478.50;

fn landing(store: &mut SessionStore<MemoryStore>, input: &str) -> Option<Route> {
    let quote = quote_from_input(input, RATE);
    start_exchange(store, input, &quote)
}

#[test]
fn full_exchange_walks_every_step() {
    let mut store = SessionStore::new(MemoryStore::new());

    assert_eq!(landing(&mut store, "22000"), Some(Route::Confirm));

    let mut confirm = ConfirmView::load(&mut store).expect("session after landing");
    assert_eq!(confirm.session.from_amount, "22000");
    assert_eq!(confirm.session.to_amount, "46.90");
    confirm.form.email = " buyer@example.com ".to_string();
    confirm.form.wallet_address = "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE".to_string();
    confirm.form.agreed = true;
    assert!(confirm.form.can_submit());
    assert_eq!(confirm.form.submit(&mut store), Some(Route::Payment));

    let payment = PaymentView::load(&mut store).expect("session after confirm");
    assert_eq!(payment.amount_due(), "22000");
    assert_eq!(payment.session.email.as_deref(), Some("buyer@example.com"));
    assert_eq!(payment.confirm_transfer(), Route::Status);

    let status = StatusView::load(&mut store).expect("session after payment");
    assert_eq!(format!("{:.2}", status.display_rate()), "469.12");
    assert_eq!(status.display_amount(), "46.90");
    assert_eq!(status.wallet_address(), "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE");
    assert!(status.transaction_id.starts_with("TX"));

    assert_eq!(start_new_exchange(&mut store), Route::Landing);
    assert!(store.get().is_none());
    assert_eq!(ConfirmView::load(&mut store).err(), Some(Route::Landing));
}

#[test]
fn amount_below_minimum_stays_on_landing() {
    let mut store = SessionStore::new(MemoryStore::new());
    assert_eq!(landing(&mut store, "21999"), None);
    assert_eq!(landing(&mut store, ""), None);
    assert!(store.get().is_none());
    assert!(store.mirror().is_empty());
}

#[test]
fn checkout_steps_redirect_without_session() {
    let mut store = SessionStore::new(MemoryStore::new());
    assert_eq!(ConfirmView::load(&mut store).err(), Some(Route::Landing));
    assert_eq!(PaymentView::load(&mut store).err(), Some(Route::Landing));
    assert_eq!(StatusView::load(&mut store).err(), Some(Route::Landing));
}

#[test]
fn reload_resumes_from_mirror() {
    let mut store = SessionStore::new(MemoryStore::new());
    landing(&mut store, "1000000");

    // A fresh store over the same storage behaves like a page reload.
    let mut reloaded = SessionStore::new(store.mirror().clone());
    let confirm = ConfirmView::load(&mut reloaded).expect("mirror survives reload");
    assert_eq!(confirm.session.to_amount, "2135.84");
    assert_eq!(confirm.form, ConfirmForm::prefilled(&confirm.session));
}

#[test]
fn mirror_uses_camel_case_keys() {
    let mut store = SessionStore::new(MemoryStore::new());
    landing(&mut store, "22000");

    let raw = store
        .mirror()
        .get(PERSISTENCE.session.key)
        .unwrap()
        .expect("session written through");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["fromAmount"], "22000");
    assert_eq!(json["toAmount"], "46.90");
    assert_eq!(json["exchangeRate"], RATE);
    assert!(json.get("walletAddress").is_none());
}

#[test]
fn corrupt_mirror_reads_as_no_session() {
    let mut mirror = MemoryStore::new();
    mirror.set(PERSISTENCE.session.key, "{not json").unwrap();
    let mut store = SessionStore::new(mirror);
    assert!(store.get().is_none());
    assert_eq!(PaymentView::load(&mut store).err(), Some(Route::Landing));
}
