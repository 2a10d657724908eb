/// A saved customer address. Booked orders take an owned snapshot of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: String,
    pub label: String,
    pub line: String,
    pub lat: f64,
    pub lng: f64,
    pub is_default: bool,
}

/// The customer profile: contact details plus saved addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub addresses: Vec<Address>,
}

impl UserProfile {
    /// The address bookings fall back to when none is picked explicitly.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

/// Sample customer account shipped with the demo.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "user_123".to_string(),
        name: "John Doe".to_string(),
        phone: "+91 9876543210".to_string(),
        email: "john@example.com".to_string(),
        addresses: vec![Address {
            id: "addr_1".to_string(),
            label: "Home".to_string(),
            line: "A-123, Sector 62, Noida".to_string(),
            lat: 28.6139,
            lng: 77.2090,
            is_default: true,
        }],
    }
}
