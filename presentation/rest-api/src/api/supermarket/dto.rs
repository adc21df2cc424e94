use poem_openapi::Object;

use business::domain::supermarket::model::Supermarket;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupermarketResponse {
    /// Shop name, "Unknown" when not mapped
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Supermarket> for SupermarketResponse {
    fn from(supermarket: Supermarket) -> Self {
        Self {
            name: supermarket.name,
            address: supermarket.address,
            latitude: supermarket.latitude,
            longitude: supermarket.longitude,
        }
    }
}
