use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Column width of `producto.nombre`.
pub const MAX_NAME_CHARS: usize = 100;

/// A row of the `producto` table. Row decoding lives in `storage::products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i32,
}

/// Body of create and update requests. Every field is required; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i32,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        let name_len = self.nombre.chars().count();
        if name_len > MAX_NAME_CHARS {
            return Err(AppError::Validation(format!(
                "nombre must be at most {} characters (got {})",
                MAX_NAME_CHARS, name_len
            )));
        }
        Ok(())
    }

    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            stock: self.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_requires_every_field() {
        let partial = json!({ "nombre": "A", "descripcion": "B", "precio": 1.5 });
        let err = serde_json::from_value::<ProductPayload>(partial).unwrap_err();
        assert!(err.to_string().contains("stock"));
    }

    #[test]
    fn payload_accepts_negative_price_and_stock() {
        let payload: ProductPayload = serde_json::from_value(json!({
            "nombre": "A", "descripcion": "B", "precio": -3.25, "stock": -7
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.precio, -3.25);
        assert_eq!(payload.stock, -7);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let payload = ProductPayload {
            nombre: "x".repeat(MAX_NAME_CHARS + 1),
            descripcion: String::new(),
            precio: 0.0,
            stock: 0,
        };
        assert!(matches!(payload.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let payload = ProductPayload {
            nombre: "ñ".repeat(MAX_NAME_CHARS),
            descripcion: String::new(),
            precio: 0.0,
            stock: 0,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn product_serializes_with_wire_field_names() {
        let product = ProductPayload {
            nombre: "A".into(),
            descripcion: "B".into(),
            precio: 1.5,
            stock: 10,
        }
        .into_product(7);
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "id": 7, "nombre": "A", "descripcion": "B", "precio": 1.5, "stock": 10 })
        );
    }
}
