//! UPI deep-link construction.
//!
//! The link is a client-side payment intent only; the server never verifies
//! that a payment happened. The same string is rendered as a QR code and as
//! a tap-to-pay anchor.

use url::form_urlencoded;

/// Payee details used when building payment links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiAccount {
    /// Virtual payment address, e.g. `carefund@upi`.
    pub vpa: String,
    /// Payee name shown in the payer's UPI app when the donor leaves the
    /// name field blank.
    pub fallback_payee_name: String,
}

impl UpiAccount {
    /// Build a `upi://pay` deep link for the given payer name and amount.
    ///
    /// Query values are percent-encoded so free-text donor names cannot
    /// break the link.
    ///
    /// # Examples
    /// ```
    /// use carefund_backend::domain::UpiAccount;
    ///
    /// let account = UpiAccount {
    ///     vpa: "carefund@upi".to_owned(),
    ///     fallback_payee_name: "CareFund".to_owned(),
    /// };
    /// let link = account.payment_link("A B", 500.0);
    /// assert!(link.starts_with("upi://pay?"));
    /// assert!(link.contains("pn=A+B"));
    /// ```
    pub fn payment_link(&self, payer_name: &str, amount: f64) -> String {
        let name = if payer_name.trim().is_empty() {
            self.fallback_payee_name.as_str()
        } else {
            payer_name
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("pa", self.vpa.as_str())
            .append_pair("pn", name)
            .append_pair("am", format!("{amount}").as_str())
            .append_pair("cu", "INR")
            .finish();
        format!("upi://pay?{query}")
    }
}
