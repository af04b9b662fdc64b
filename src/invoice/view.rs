use rust_decimal::Decimal;

use crate::api::InvoicePage;

/// One charge on an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub description: String,
    /// Usage point and plaza joined by `/`
    pub place_name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub name: String,
    pub plate: String,
}

/// Line items of one invoice month, in the order the service listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceView {
    items: Vec<InvoiceItem>,
    vehicle: Option<Vehicle>,
}

impl InvoiceView {
    /// Flatten fetched pages, keeping page order then in-page order.
    /// The vehicle comes from the first item of the first page.
    pub fn from_pages(pages: Vec<InvoicePage>) -> Self {
        let vehicle = pages
            .first()
            .and_then(|page| page.item_faturas.first())
            .map(|item| Vehicle {
                name: item.modelo_veiculo.clone().unwrap_or_default(),
                plate: item.placa_veiculo.clone().unwrap_or_default(),
            });

        let items = pages
            .into_iter()
            .flat_map(|page| page.item_faturas)
            .map(|item| InvoiceItem {
                description: item.descricao_item_fatura,
                place_name: format!("{}/{}", item.nome_ponto_uso, item.nome_praca),
                value: item.valor_bruto_fatura,
            })
            .collect();

        Self { items, vehicle }
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Sum of all item values
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn page(json: &str) -> InvoicePage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flattens_pages_in_order() {
        let view = InvoiceView::from_pages(vec![
            page(
                r#"{"itemFaturas": [
                    {"descricaoItemFatura": "A", "nomePontoUso": "Rod 1", "nomePraca": "P1",
                     "valorBrutoFatura": 10.00, "modeloVeiculo": "Fusca", "placaVeiculo": "ABC1234"},
                    {"descricaoItemFatura": "B", "nomePontoUso": "Rod 2", "nomePraca": "P2",
                     "valorBrutoFatura": 5.50, "modeloVeiculo": "Gol", "placaVeiculo": "XYZ9876"}
                ]}"#,
            ),
            page(
                r#"{"itemFaturas": [
                    {"descricaoItemFatura": "C", "nomePontoUso": "Shopping", "nomePraca": "Estac",
                     "valorBrutoFatura": 0.1}
                ]}"#,
            ),
        ]);

        let descriptions: Vec<&str> = view.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(descriptions, vec!["A", "B", "C"]);
        assert_eq!(view.items()[0].place_name, "Rod 1/P1");
        assert_eq!(view.total(), dec!(15.60));
        assert_eq!(
            view.vehicle(),
            Some(&Vehicle {
                name: "Fusca".into(),
                plate: "ABC1234".into()
            })
        );
    }

    #[test]
    fn test_no_pages() {
        let view = InvoiceView::from_pages(Vec::new());
        assert!(view.items().is_empty());
        assert_eq!(view.total(), Decimal::ZERO);
        assert_eq!(view.vehicle(), None);
    }

    #[test]
    fn test_tenths_sum_exactly() {
        let items = (0..10)
            .map(|_| {
                r#"{"descricaoItemFatura": "x", "nomePontoUso": "a", "nomePraca": "b", "valorBrutoFatura": 0.1}"#
            })
            .collect::<Vec<_>>()
            .join(",");
        let view = InvoiceView::from_pages(vec![page(&format!(r#"{{"itemFaturas": [{items}]}}"#))]);
        assert_eq!(view.total(), dec!(1.0));
    }
}
