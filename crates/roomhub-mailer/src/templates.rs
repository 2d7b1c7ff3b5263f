//! French HTML templates for reservation notices.

use crate::message::{EmailMessage, ReservationEmail};

/// Per-guest prices quoted in the catering summary, mirroring the
/// reservation price table.
const LUNCH_PRICE: i64 = 25_000;
const BREAKFAST_PRICES: [(i16, &str, i64); 3] = [
    (1, "Petit-déjeuner Option 1", 6_000),
    (2, "Petit-déjeuner Option 2", 9_000),
    (3, "Petit-déjeuner Option 3", 12_000),
];
const COFFEE_BREAK_PRICE: i64 = 3_500;

/// Render the booking confirmation sent to the customer.
pub fn customer_confirmation(data: &ReservationEmail) -> EmailMessage {
    let html = format!(
        "<div style=\"font-family:sans-serif;max-width:600px;margin:0 auto;\">\
         <h2 style=\"color:#063d21;\">Demande de réservation reçue</h2>\
         <p>Bonjour {name},</p>\
         <p>Nous avons bien reçu votre demande de réservation pour la salle \
         <strong>{room}</strong>. Elle sera examinée et vous recevrez une \
         confirmation par email.</p>\
         {summary}\
         <p style=\"font-size:12px;color:#718096;\">Référence : {reference}</p>\
         </div>",
        name = data.customer_name,
        room = data.room_name,
        summary = summary_block(data),
        reference = data.reservation_id,
    );

    EmailMessage {
        to: data.customer_email.clone(),
        subject: format!("Votre demande de réservation — {}", data.room_name),
        html,
    }
}

/// Render the new-booking alert sent to an admin address.
pub fn admin_alert(data: &ReservationEmail, recipient: &str) -> EmailMessage {
    let html = format!(
        "<div style=\"font-family:sans-serif;max-width:600px;margin:0 auto;\">\
         <h2 style=\"color:#063d21;\">Nouvelle demande de réservation</h2>\
         <p><strong>{name}</strong> ({email}, {phone}) demande la salle \
         <strong>{room}</strong> pour : {object}.</p>\
         {summary}\
         <p style=\"font-size:12px;color:#718096;\">Référence : {reference}</p>\
         </div>",
        name = data.customer_name,
        email = data.customer_email,
        phone = data.customer_phone,
        room = data.room_name,
        object = data.event_object,
        summary = summary_block(data),
        reference = data.reservation_id,
    );

    EmailMessage {
        to: recipient.to_string(),
        subject: format!("Nouvelle réservation — {}", data.room_name),
        html,
    }
}

/// Render the cancellation notice sent to the customer.
///
/// Quotes the historical total: cancellation never recomputes prices.
pub fn cancellation(data: &ReservationEmail) -> EmailMessage {
    let html = format!(
        "<div style=\"font-family:sans-serif;max-width:600px;margin:0 auto;\">\
         <h2 style=\"color:#9b2c2c;\">Réservation annulée</h2>\
         <p>Bonjour {name},</p>\
         <p>Votre réservation de la salle <strong>{room}</strong> du \
         {start} au {end} a été annulée.</p>\
         <p>Montant de la réservation : <strong>{price} FCFA</strong></p>\
         <p style=\"font-size:12px;color:#718096;\">Référence : {reference}</p>\
         </div>",
        name = data.customer_name,
        room = data.room_name,
        start = data.start_time.format("%d/%m/%Y"),
        end = data.end_time.format("%d/%m/%Y"),
        price = format_fcfa(data.total_price),
        reference = data.reservation_id,
    );

    EmailMessage {
        to: data.customer_email.clone(),
        subject: format!("Annulation de votre réservation — {}", data.room_name),
        html,
    }
}

/// Shared reservation summary block: dates, hours, guests, catering, total.
fn summary_block(data: &ReservationEmail) -> String {
    let mut rows = vec![
        format!(
            "<div>Période : du {} au {}</div>",
            data.start_time.format("%d/%m/%Y"),
            data.end_time.format("%d/%m/%Y")
        ),
        format!(
            "<div>Horaires : {:02}:00 – {:02}:00</div>",
            data.start_hour, data.end_hour
        ),
        format!("<div>Participants : {}</div>", data.number_of_guests),
    ];

    rows.extend(catering_lines(data));

    if let Some(notes) = &data.notes {
        if !notes.is_empty() {
            rows.push(format!("<div>Notes : {notes}</div>"));
        }
    }

    rows.push(format!(
        "<div style=\"margin-top:8px;font-weight:600;\">Prix total : {} FCFA</div>",
        format_fcfa(data.total_price)
    ));

    format!(
        "<div style=\"background:#f7fafc;border:1px solid #e2e8f0;border-radius:8px;padding:16px;\">{}</div>",
        rows.join("")
    )
}

/// One line per selected catering option, priced per guest.
fn catering_lines(data: &ReservationEmail) -> Vec<String> {
    let guests = i64::from(data.number_of_guests);
    let mut lines = Vec::new();

    if data.lunch_selected {
        lines.push(format!(
            "<div>✓ Déjeuner Complet — {} FCFA</div>",
            format_fcfa(LUNCH_PRICE * guests)
        ));
    }
    if let Some(option) = data.breakfast_option {
        if let Some((_, name, price)) = BREAKFAST_PRICES.iter().find(|(id, _, _)| *id == option) {
            lines.push(format!(
                "<div>✓ {name} — {} FCFA</div>",
                format_fcfa(price * guests)
            ));
        }
    }
    if data.coffee_break_selected {
        lines.push(format!(
            "<div>✓ Pause-café — {} FCFA</div>",
            format_fcfa(COFFEE_BREAK_PRICE * guests)
        ));
    }

    lines
}

/// Format an FCFA amount with non-breaking-space thousands separators,
/// French style: `400000` → `"400 000"`.
pub fn format_fcfa(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn email_data() -> ReservationEmail {
        ReservationEmail {
            reservation_id: Uuid::new_v4(),
            customer_name: "Jean Dupont".to_string(),
            customer_email: "jean.dupont@example.com".to_string(),
            customer_phone: "+241 01 02 03 04".to_string(),
            room_name: "Salle Okoumé".to_string(),
            event_object: "Formation".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 12, 18, 0, 0).unwrap(),
            start_hour: 8,
            end_hour: 18,
            total_price: 400_000,
            number_of_guests: 4,
            lunch_selected: true,
            breakfast_option: None,
            coffee_break_selected: false,
            notes: None,
        }
    }

    #[test]
    fn test_format_fcfa_grouping() {
        assert_eq!(format_fcfa(0), "0");
        assert_eq!(format_fcfa(3500), "3\u{202f}500");
        assert_eq!(format_fcfa(400_000), "400\u{202f}000");
        assert_eq!(format_fcfa(12_345_678), "12\u{202f}345\u{202f}678");
    }

    #[test]
    fn test_customer_confirmation_addresses_customer() {
        let message = customer_confirmation(&email_data());
        assert_eq!(message.to, "jean.dupont@example.com");
        assert!(message.subject.contains("Salle Okoumé"));
        assert!(message.html.contains("Jean Dupont"));
        assert!(message.html.contains("Déjeuner Complet"));
        assert!(message.html.contains("400\u{202f}000"));
    }

    #[test]
    fn test_admin_alert_goes_to_recipient() {
        let message = admin_alert(&email_data(), "admin@example.com");
        assert_eq!(message.to, "admin@example.com");
        assert!(message.html.contains("Formation"));
        assert!(message.html.contains("+241 01 02 03 04"));
    }

    #[test]
    fn test_cancellation_quotes_historical_total() {
        let message = cancellation(&email_data());
        assert!(message.subject.contains("Annulation"));
        assert!(message.html.contains("10/03/2024"));
        assert!(message.html.contains("12/03/2024"));
        assert!(message.html.contains("400\u{202f}000"));
    }

    #[test]
    fn test_breakfast_tier_named_in_summary() {
        let mut data = email_data();
        data.breakfast_option = Some(2);
        let message = customer_confirmation(&data);
        assert!(message.html.contains("Petit-déjeuner Option 2"));
        // 9 000 × 4 guests
        assert!(message.html.contains("36\u{202f}000"));
    }
}
