use {
    crate::{config::PRICING, utils::format_grouped},
    std::sync::LazyLock,
};

pub const ICON_ARROW_LEFT: &str = "⬅";
pub const ICON_EXCHANGE: &str = "⟷";
pub const ICON_CHECK: &str = "✔";
pub const ICON_SHIELD: &str = "🛡";
pub const ICON_BOLT: &str = "⚡";
pub const ICON_CLOCK: &str = "🕑";
pub const ICON_COPY: &str = "🗐";
pub const ICON_STAR: &str = "★";
pub const ICON_DOT: &str = "●";

pub struct UiText {
    // --- Header / footer ---
    pub brand: String,
    pub brand_tagline: String,
    pub brand_online: String,
    pub footer_lead: String,
    pub footer_body: String,
    pub footer_contacts: String,
    pub footer_copyright: String,
    /// (label, url)
    pub contacts: &'static [(&'static str, &'static str)],

    // --- Landing hero ---
    pub hero_title: String,
    pub hero_pair: String,
    pub hero_body: String,
    pub badge_security: String,
    pub badge_instant: String,
    pub badge_support: String,

    // --- Calculator ---
    pub calc_title: String,
    pub calc_subtitle: String,
    pub calc_give: String,
    pub calc_get: String,
    pub calc_start: String,
    pub calc_min_amount: String,
    pub calc_current_rate: String,
    pub calc_bonus_rate: String,
    pub calc_loading: String,
    pub calc_no_value: String,
    pub calc_tiers_title: String,

    // --- Live trades ---
    pub trades_title: String,
    pub trades_live: String,

    // --- Stats / social proof ---
    pub stats: &'static [(&'static str, &'static str)],
    pub testimonials_title: String,
    /// (name, text)
    pub testimonials: &'static [(&'static str, &'static str)],
    pub partners_title: String,
    pub partners: &'static [&'static str],

    // --- Confirm ---
    pub back: String,
    pub confirm_title: String,
    pub confirm_rate: String,
    pub confirm_commission: String,
    pub confirm_processing: String,
    pub confirm_status: String,
    pub confirm_status_active: String,
    pub confirm_contact_title: String,
    pub confirm_email: String,
    pub confirm_email_hint: String,
    pub confirm_wallet: String,
    pub confirm_wallet_hint: String,
    pub confirm_required: String,
    pub confirm_agreement: String,
    pub confirm_submit: String,
    pub confirm_safe_title: String,
    pub confirm_safe_body: String,

    // --- Payment ---
    pub payment_back: String,
    pub payment_title: String,
    pub payment_due: String,
    pub payment_receive: String,
    pub payment_transfer_title: String,
    pub payment_card_caption: String,
    pub payment_recipient: String,
    pub payment_bank: String,
    pub payment_steps_title: String,
    pub payment_step_open_app: String,
    pub payment_step_choose: String,
    pub payment_step_card: String,
    pub payment_step_amount: String,
    pub payment_step_confirm: String,
    pub payment_secure_title: String,
    pub payment_secure_points: &'static [&'static str],
    pub payment_processing: String,
    pub payment_done: String,
    pub payment_trouble: String,
    pub support_contact: String,

    // --- Status ---
    pub status_processing_title: String,
    pub status_processing_body: String,
    pub status_progress: String,
    pub status_done_title: String,
    pub status_done_body: String,
    pub status_gave: String,
    pub status_got: String,
    pub status_tx_id: String,
    pub status_date: String,
    pub status_rate: String,
    pub status_state: String,
    pub status_state_done: String,
    pub status_sent_to: String,
    pub status_new_exchange: String,
    pub status_help_title: String,
    pub status_help_body: String,
    pub copied: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    brand: "ALMASU".to_string(),
    brand_tagline: "Обменник криптовалюты".to_string(),
    brand_online: "Онлайн".to_string(),
    footer_lead: "Ведущий обменник криптовалюты".to_string(),
    footer_body: "Мы обеспечиваем надежные и быстрые услуги обмена цифровых активов с высочайшим уровнем безопасности.".to_string(),
    footer_contacts: "Контакты".to_string(),
    footer_copyright: "© 2024 ALMASU. Все права защищены.".to_string(),
    contacts: &[
        ("@Serik_Maksat", "https://t.me/Serik_Maksat"),
        ("@BelieveredST", "https://t.me/BelieveredST"),
        ("Telegram группа", "https://t.me/+lbkM7nFi0VcyMTNi"),
    ],

    hero_title: "Быстрый обмен".to_string(),
    hero_pair: format!("KZT {} USDT", ICON_EXCHANGE),
    hero_body: "Самые выгодные курсы и мгновенные переводы. Безопасно, надежно, круглосуточно."
        .to_string(),
    badge_security: format!("{} Банковская безопасность", ICON_SHIELD),
    badge_instant: format!("{} Мгновенно", ICON_BOLT),
    badge_support: format!("{} 24/7 поддержка", ICON_CLOCK),

    calc_title: "Обмен валют".to_string(),
    calc_subtitle: "Введите сумму для расчета курса".to_string(),
    calc_give: "Отдаете".to_string(),
    calc_get: "Получаете".to_string(),
    calc_start: "НАЧАТЬ ОБМЕН".to_string(),
    calc_min_amount: format!(
        "Минимальная сумма для обмена: {} {}",
        format_grouped(PRICING.min_fiat_amount, 0),
        PRICING.fiat_code
    ),
    calc_current_rate: "Текущий курс USDT:".to_string(),
    calc_bonus_rate: "Ваш курс с бонусом:".to_string(),
    calc_loading: "Загружается...".to_string(),
    calc_no_value: "—".to_string(),
    calc_tiers_title: "Бонус к курсу".to_string(),

    trades_title: "Сделки в реальном времени".to_string(),
    trades_live: "LIVE".to_string(),

    stats: &[("₸2М+", "Обменов в месяц"), ("24/7", "Поддержка клиентов")],
    testimonials_title: "Отзывы клиентов".to_string(),
    testimonials: &[
        (
            "Александр К.",
            "Отличный сервис для обмена криптовалют. Быстро, надежно и с хорошими курсами.",
        ),
        (
            "Мария П.",
            "Пользуюсь уже полгода, все операции проходят без проблем. Рекомендую!",
        ),
        (
            "Дмитрий С.",
            "Лучший обменник криптовалют в Казахстане. Поддержка всегда готова помочь.",
        ),
    ],
    partners_title: "Наши партнеры".to_string(),
    partners: &["BINANCE", "BYBIT", "KUCOIN", "HUOBI"],

    back: format!("{} Назад", ICON_ARROW_LEFT),
    confirm_title: "Подтверждение обмена".to_string(),
    confirm_rate: "Курс обмена:".to_string(),
    confirm_commission: "Комиссия:".to_string(),
    confirm_processing: "Время обработки:".to_string(),
    confirm_status: "Статус:".to_string(),
    confirm_status_active: "Активен".to_string(),
    confirm_contact_title: "Контактная информация".to_string(),
    confirm_email: "Email адрес".to_string(),
    confirm_email_hint: "example@mail.com".to_string(),
    confirm_wallet: "Кошелек USDT (TRC20) *".to_string(),
    confirm_wallet_hint: "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE".to_string(),
    confirm_required: "Поле обязательно для заполнения".to_string(),
    confirm_agreement: "Я согласен с условиями использования и политикой конфиденциальности"
        .to_string(),
    confirm_submit: "Подтвердить обмен".to_string(),
    confirm_safe_title: format!("{} Безопасная сделка", ICON_SHIELD),
    confirm_safe_body:
        "Все операции защищены банковским шифрованием. Ваши данные в полной безопасности."
            .to_string(),

    payment_back: format!("{} Назад к подтверждению", ICON_ARROW_LEFT),
    payment_title: "Оплата".to_string(),
    payment_due: "К оплате:".to_string(),
    payment_receive: "Получите:".to_string(),
    payment_transfer_title: "Переведите средства на карту".to_string(),
    payment_card_caption: "Номер карты для перевода".to_string(),
    payment_recipient: "Получатель:".to_string(),
    payment_bank: "Банк:".to_string(),
    payment_steps_title: "Инструкция по переводу:".to_string(),
    payment_step_open_app: "Откройте мобильное приложение вашего банка".to_string(),
    payment_step_choose: "Выберите \"Перевод на карту\"".to_string(),
    payment_step_card: "Введите номер карты:".to_string(),
    payment_step_amount: "Укажите сумму:".to_string(),
    payment_step_confirm: "Подтвердите перевод".to_string(),
    payment_secure_title: format!("{} Безопасная оплата", ICON_SHIELD),
    payment_secure_points: &[
        "SSL шифрование",
        "PCI DSS сертификация",
        "3D Secure защита",
        "Данные не сохраняются",
    ],
    payment_processing: "Обработка платежа:".to_string(),
    payment_done: "Я перевел".to_string(),
    payment_trouble: "Возникли проблемы с оплатой?".to_string(),
    support_contact: "Связаться с поддержкой".to_string(),

    status_processing_title: "Обработка транзакции".to_string(),
    status_processing_body: "Ваш платеж обрабатывается. Пожалуйста, не закрывайте эту страницу."
        .to_string(),
    status_progress: "Прогресс:".to_string(),
    status_done_title: format!("{} Транзакция завершена!", ICON_CHECK),
    status_done_body: "Ваш обмен успешно выполнен".to_string(),
    status_gave: "Отдали".to_string(),
    status_got: "Получили".to_string(),
    status_tx_id: "ID транзакции:".to_string(),
    status_date: "Дата и время:".to_string(),
    status_rate: "Курс обмена:".to_string(),
    status_state: "Статус:".to_string(),
    status_state_done: "Завершено".to_string(),
    status_sent_to: "USDT отправлены на ваш кошелек:".to_string(),
    status_new_exchange: "Новый обмен".to_string(),
    status_help_title: "Нужна помощь?".to_string(),
    status_help_body: "Наша служба поддержки работает 24/7 и готова помочь вам в любое время"
        .to_string(),
    copied: format!("{} Скопировано", ICON_CHECK),
});
