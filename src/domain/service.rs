/// A bookable service category from the fixed catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub price_range: String,
    pub eta: String,
    pub available: bool,
}

impl ServiceCategory {
    fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        price_range: impl Into<String>,
        eta: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            price_range: price_range.into(),
            eta: eta.into(),
            available,
        }
    }
}

/// The fixed service catalog offered to customers.
pub fn catalog() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory::new("plumbing", "Plumbing", "🔧", "₹500-2000", "30 mins", true),
        ServiceCategory::new("electrical", "Electrician", "⚡", "₹300-1500", "45 mins", true),
        ServiceCategory::new("cleaning", "Cleaning", "🧹", "₹400-1200", "2 hours", true),
        ServiceCategory::new("ac_service", "AC Service", "❄️", "₹600-2500", "1 hour", true),
        ServiceCategory::new("carpentry", "Carpentry", "🔨", "₹800-3000", "3 hours", true),
        ServiceCategory::new("painting", "Painting", "🎨", "₹1500-5000", "1 day", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_categories_with_painting_unavailable() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        let painting = catalog.iter().find(|s| s.id == "painting").unwrap();
        assert!(!painting.available);
        assert!(catalog.iter().filter(|s| s.available).count() == 5);
    }
}
