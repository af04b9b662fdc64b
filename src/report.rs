//! Plain-text rendering of totals, extracts and the account profile.

use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{settings::Style, Table, Tabled};

use crate::invoice::InvoiceView;
use crate::profile::AccountProfile;

#[derive(Tabled)]
struct ExtractRow {
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Place")]
    place: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Fixed two decimal places, halves rounded away from zero
pub fn format_money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn render_total(total: Decimal) -> String {
    format!("Total: {}", format_money(total))
}

/// One row per item plus a trailing TOTAL row summed from the same items.
pub fn render_extract(view: &InvoiceView) -> String {
    let vehicle = view.vehicle().map(|v| v.name.clone()).unwrap_or_default();
    let mut rows: Vec<ExtractRow> = view
        .items()
        .iter()
        .map(|item| ExtractRow {
            vehicle: vehicle.clone(),
            place: item.place_name.clone(),
            description: item.description.clone(),
            value: format_money(item.value),
        })
        .collect();

    let total: Decimal = view.items().iter().map(|item| item.value).sum();
    rows.push(ExtractRow {
        vehicle: "TOTAL".to_string(),
        place: "---".to_string(),
        description: "---".to_string(),
        value: format_money(total),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_profile(profile: &AccountProfile) -> String {
    let bank = &profile.bank_account;
    let address = &profile.address;
    let rows = vec![
        ProfileRow { field: "Name", value: profile.name.clone() },
        ProfileRow { field: "Client code", value: profile.client_code.clone() },
        ProfileRow { field: "Email", value: profile.email.clone() },
        ProfileRow { field: "Mobile", value: profile.mobile_number.clone() },
        ProfileRow { field: "Due day", value: profile.due_date.clone() },
        ProfileRow { field: "Vehicles", value: profile.vehicle_count.to_string() },
        ProfileRow {
            field: "Blocked",
            value: if profile.blocked { "yes" } else { "no" }.to_string(),
        },
        ProfileRow {
            field: "Bank",
            value: format!(
                "{} - {} ({}) {}-{}",
                bank.bank_name, bank.branch_name, bank.branch_number, bank.account_number, bank.account_digit
            ),
        },
        ProfileRow {
            field: "Address",
            value: format!(
                "{}, {} - {}, {}/{} {}",
                address.street, address.number, address.neighborhood, address.city, address.state, address.zip_code
            ),
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InvoicePage;
    use rust_decimal_macros::dec;

    fn view() -> InvoiceView {
        let page: InvoicePage = serde_json::from_str(
            r#"{"itemFaturas": [
                {"descricaoItemFatura": "Pedagio", "nomePontoUso": "Rod. Anhanguera", "nomePraca": "Valinhos",
                 "valorBrutoFatura": 10.00, "modeloVeiculo": "Onix", "placaVeiculo": "ABC1D23"},
                {"descricaoItemFatura": "Estacionamento", "nomePontoUso": "Shopping", "nomePraca": "Piso G1",
                 "valorBrutoFatura": 5.5}
            ]}"#,
        )
        .unwrap();
        InvoiceView::from_pages(vec![page])
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(15.5)), "15.50");
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(2.345)), "2.35");
        assert_eq!(format_money(dec!(2.355)), "2.36");
        assert_eq!(format_money(dec!(-2.345)), "-2.35");
    }

    #[test]
    fn test_render_total() {
        assert_eq!(render_total(dec!(15.50)), "Total: 15.50");
        assert_eq!(render_total(Decimal::ZERO), "Total: 0.00");
    }

    #[test]
    fn test_render_extract() {
        let table = render_extract(&view());
        assert!(table.contains("Vehicle"));
        assert!(table.contains("Rod. Anhanguera/Valinhos"));
        assert!(table.contains("Shopping/Piso G1"));
        assert!(table.contains("Onix"));
        assert!(table.contains("10.00"));
        assert!(table.contains("5.50"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("15.50"));
    }

    #[test]
    fn test_render_empty_extract_has_total_row() {
        let table = render_extract(&InvoiceView::default());
        assert!(table.contains("TOTAL"));
        assert!(table.contains("0.00"));
    }
}
