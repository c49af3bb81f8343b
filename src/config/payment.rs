pub struct PaymentConfig {
    pub card_number: &'static str,
    pub recipient: &'static str,
    pub bank: &'static str,
    pub commission: &'static str,
    pub processing_time: &'static str,
    pub payment_time: &'static str,
    pub support_url: &'static str,
}

pub const PAYMENT: PaymentConfig = PaymentConfig {
    card_number: "4003 0351 1568 5047",
    recipient: "Sadykov Bekzat",
    bank: "Halyk Bank",
    commission: "0%",
    processing_time: "5-15 мин",
    payment_time: "1-3 минуты",
    support_url: "https://t.me/Serik_Maksat",
};
