//! Builders and fixture coupons shared across the unit tests.

use std::collections::BTreeSet;

use crate::coupon::{
    Coupon, ExpiryDate, MonetaryAmount, Name, PercentageAmount, Phone, Saveable, Savings, Tag,
};

/// The `add` argument text that builds [amy].
pub const AMY_ARGS: &str = "n/Amy Bee p/11111111 s/Cake s/Croissant e/30-12-2020 t/friend";

/// A coupon saving two free items, expiring 30-12-2020, tagged 'friend'.
pub fn amy() -> Coupon {
    CouponBuilder::new()
        .with_name("Amy Bee")
        .with_phone("11111111")
        .with_saveables(&["Cake", "Croissant"])
        .with_expiry_date("30-12-2020")
        .with_tags(&["friend"])
        .build()
}

/// A coupon saving $2.20 plus two free items, expiring 31-12-2020, tagged
/// 'husband' and 'friend'.
pub fn bob() -> Coupon {
    CouponBuilder::new()
        .with_name("Bob Choo")
        .with_phone("22222222")
        .with_monetary_amount(2.2)
        .with_saveables(&["Coffee", "Tea"])
        .with_expiry_date("31-12-2020")
        .with_tags(&["husband", "friend"])
        .build()
}

/// A coupon saving 25% plus the default free gift, expiring 1-6-2021,
/// untagged.
pub fn carl() -> Coupon {
    CouponBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_percentage_amount(25.0)
        .with_expiry_date("1-6-2021")
        .build()
}

/// Assembles coupons from raw text, panicking on invalid fixture data.
#[derive(Debug, Clone)]
pub struct CouponBuilder {
    name: Name,
    phone: Phone,
    monetary: Option<MonetaryAmount>,
    percentage: Option<PercentageAmount>,
    saveables: Vec<Saveable>,
    expiry_date: ExpiryDate,
    tags: BTreeSet<Tag>,
}

impl CouponBuilder {
    /// A builder preloaded with valid defaults.
    pub fn new() -> Self {
        Self {
            name: Name::new("Alice Pauline").unwrap(),
            phone: Phone::new("94351253").unwrap(),
            monetary: None,
            percentage: None,
            saveables: vec![Saveable::new("Free Gift").unwrap()],
            expiry_date: ExpiryDate::new("31-12-2025").unwrap(),
            tags: BTreeSet::new(),
        }
    }

    /// A builder preloaded with `coupon`'s fields.
    pub fn from(coupon: &Coupon) -> Self {
        Self {
            name: coupon.name().clone(),
            phone: coupon.phone().clone(),
            monetary: coupon.savings().monetary(),
            percentage: coupon.savings().percentage(),
            saveables: coupon.savings().saveables().to_vec(),
            expiry_date: *coupon.expiry_date(),
            tags: coupon.tags().clone(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Name::new(name).unwrap();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Phone::new(phone).unwrap();
        self
    }

    pub fn with_monetary_amount(mut self, amount: f64) -> Self {
        self.monetary = Some(MonetaryAmount::new(amount).unwrap());
        self
    }

    pub fn with_percentage_amount(mut self, amount: f64) -> Self {
        self.percentage = Some(PercentageAmount::new(amount).unwrap());
        self
    }

    pub fn with_saveables(mut self, texts: &[&str]) -> Self {
        self.saveables = texts
            .iter()
            .map(|text| Saveable::new(text).unwrap())
            .collect();
        self
    }

    pub fn with_expiry_date(mut self, date: &str) -> Self {
        self.expiry_date = ExpiryDate::new(date).unwrap();
        self
    }

    pub fn with_tags(mut self, names: &[&str]) -> Self {
        self.tags = names.iter().map(|name| Tag::new(name).unwrap()).collect();
        self
    }

    pub fn build(self) -> Coupon {
        let savings =
            Savings::new(self.monetary, self.percentage, self.saveables).expect("blank savings");

        Coupon::new(self.name, self.phone, savings, self.expiry_date, self.tags)
    }
}

impl Default for CouponBuilder {
    fn default() -> Self {
        Self::new()
    }
}
