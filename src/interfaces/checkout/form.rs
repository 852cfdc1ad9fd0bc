use crate::application::gateway::CheckoutFields;
use crate::domain::submission::{FIELD_OPERATOR, FIELD_SENDER_MSISDN, FIELD_TRANSACTION_ID};
use std::fmt::Write;

/// Escapes a value for use in HTML text or a double-quoted attribute.
fn esc(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn push_required_inputs(html: &mut String) {
    let _ = write!(
        html,
        "<p class=\"form-row form-row-wide validate-required\">\
         <label>Numéro Mobile Money <abbr class=\"required\" title=\"obligatoire\">*</abbr></label>\
         <input type=\"text\" class=\"input-text\" name=\"{FIELD_SENDER_MSISDN}\" \
         placeholder=\"Numéro ayant éffectué le dépot\" value=\"\"></p>"
    );
    let _ = write!(
        html,
        "<p class=\"form-row form-row-wide validate-required\">\
         <label>ID de la transaction <abbr class=\"required\" title=\"obligatoire\">*</abbr></label>\
         <input type=\"text\" autocomplete=\"off\" class=\"input-text\" name=\"{FIELD_TRANSACTION_ID}\" \
         placeholder=\"Retrouvez ce ID dans le SMS de confirmation\" value=\"\"></p>"
    );
}

/// Renders the payment fields for the legacy (form-based) checkout.
///
/// An empty operator list renders an empty select; there is nothing for the
/// shopper to pick, matching an unconfigured gateway.
pub fn render_legacy(fields: &CheckoutFields) -> String {
    let mut html = String::from("<fieldset>");

    let _ = write!(
        html,
        "<p id=\"mm_operator_field\" class=\"form-row form-row-wide\">\
         <label>Veuillez éffectuer un dépôt de {} sur l'un des numéros ci-dessous : </label>\
         <select name=\"{FIELD_OPERATOR}\" style=\"width: 100%;\">",
        fields.cart_total
    );
    for operator in &fields.operators {
        let _ = write!(
            html,
            "<option value=\"{}\">{} ({})</option>",
            esc(&operator.name),
            esc(&operator.name),
            esc(&operator.phone)
        );
    }
    html.push_str("</select><span id=\"mm_instruction\"></span></p>");

    push_required_inputs(&mut html);
    html.push_str("</fieldset>");
    html
}

/// Renders the payment fields for the Blocks checkout. Same fields as the
/// legacy form, with the instruction carried on each option as a data
/// attribute for instant client-side display.
pub fn render_blocks(fields: &CheckoutFields) -> String {
    let mut html = String::from("<div class=\"mobile-money-blocks-fields\">");

    let _ = write!(
        html,
        "<p class=\"form-row form-row-wide\">\
         <label>Veuillez éffectuer un dépôt de {} sur l'un des numéros ci-dessous : </label>\
         <select name=\"{FIELD_OPERATOR}\" class=\"mobile-money-operator-select\">",
        fields.cart_total
    );
    for operator in &fields.operators {
        let _ = write!(
            html,
            "<option value=\"{}\" data-instruction=\"{}\">{} ({})</option>",
            esc(&operator.name),
            esc(&operator.instruction),
            esc(&operator.name),
            esc(&operator.phone)
        );
    }
    html.push_str("</select></p>");

    push_required_inputs(&mut html);
    html.push_str("<div class=\"mobile-money-instruction\" style=\"display: none;\"></div></div>");
    html
}
