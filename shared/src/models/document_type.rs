//! Document classification enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business document stream that draws folios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Quote,
    SalesOrder,
    PurchaseOrder,
    DeliveryNote,
    Invoice,
    CreditNote,
    Payment,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        Self::Quote,
        Self::SalesOrder,
        Self::PurchaseOrder,
        Self::DeliveryNote,
        Self::Invoice,
        Self::CreditNote,
        Self::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::SalesOrder => "sales_order",
            Self::PurchaseOrder => "purchase_order",
            Self::DeliveryNote => "delivery_note",
            Self::Invoice => "invoice",
            Self::CreditNote => "credit_note",
            Self::Payment => "payment",
        }
    }

    /// Prefix a freshly seeded sequence starts with
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Self::Quote => "COT",
            Self::SalesOrder => "PED",
            Self::PurchaseOrder => "OC",
            Self::DeliveryNote => "REM",
            Self::Invoice => "FAC",
            Self::CreditNote => "NC",
            Self::Payment => "PAG",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown document type: {s}"))
    }
}

/// CFDI voucher type (Ingreso / Egreso / Pago / Nómina / Traslado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CfdiType {
    #[serde(rename = "I")]
    Ingreso,
    #[serde(rename = "E")]
    Egreso,
    #[serde(rename = "P")]
    Pago,
    #[serde(rename = "N")]
    Nomina,
    #[serde(rename = "T")]
    Traslado,
}

impl CfdiType {
    pub const ALL: [CfdiType; 5] = [
        Self::Ingreso,
        Self::Egreso,
        Self::Pago,
        Self::Nomina,
        Self::Traslado,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ingreso => "I",
            Self::Egreso => "E",
            Self::Pago => "P",
            Self::Nomina => "N",
            Self::Traslado => "T",
        }
    }

    /// Code and prefix of the series created by "initialize defaults"
    pub fn default_series_code(&self) -> &'static str {
        match self {
            Self::Ingreso => "FAC",
            Self::Egreso => "NC",
            Self::Pago => "PAG",
            Self::Nomina => "NOM",
            Self::Traslado => "TRA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ingreso => "Ingreso",
            Self::Egreso => "Egreso",
            Self::Pago => "Pago",
            Self::Nomina => "Nómina",
            Self::Traslado => "Traslado",
        }
    }
}

impl fmt::Display for CfdiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CfdiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| format!("unknown CFDI type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_roundtrips_through_str() {
        for doc in DocumentType::ALL {
            assert_eq!(doc.as_str().parse::<DocumentType>().unwrap(), doc);
            let json = serde_json::to_string(&doc).unwrap();
            assert_eq!(json, format!("\"{}\"", doc.as_str()));
        }
        assert!("invoices".parse::<DocumentType>().is_err());
    }

    #[test]
    fn cfdi_type_uses_sat_codes() {
        assert_eq!(serde_json::to_string(&CfdiType::Pago).unwrap(), "\"P\"");
        assert_eq!("T".parse::<CfdiType>().unwrap(), CfdiType::Traslado);
        assert!("X".parse::<CfdiType>().is_err());
    }
}
