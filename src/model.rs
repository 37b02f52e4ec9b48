//! The `Model`: the authoritative coupon collection and its filtered view.

use crate::{coupon::Coupon, predicate::CouponPredicate};

/// The semantic failures a [Model] mutation can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The coupon being added or edited collides with an existing coupon
    /// under the weak [Coupon::is_same_coupon] identity.
    #[error("This coupon already exists in the CouponStash")]
    DuplicateCoupon,

    /// The targeted coupon is not in the stash.
    #[error("The coupon is not in the CouponStash")]
    CouponNotFound,
}

/// The backing coupon collection plus the active filter predicate.
///
/// The filtered view is recomputed on every call to
/// [Model::filtered_coupons], so it always reflects the current backing
/// collection and predicate. Every mutation either fully applies or leaves
/// the stash untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    stash: Vec<Coupon>,
    predicate: CouponPredicate,
}

impl Model {
    /// Create an empty model showing all coupons.
    pub fn new() -> Self {
        Self::from_coupons(Vec::new())
    }

    /// Create a model over an existing ordered coupon collection, showing
    /// all coupons.
    pub fn from_coupons(coupons: Vec<Coupon>) -> Self {
        Self {
            stash: coupons,
            predicate: CouponPredicate::All,
        }
    }

    /// The backing collection, in insertion order.
    pub fn coupon_stash(&self) -> &[Coupon] {
        &self.stash
    }

    /// Append a coupon to the stash.
    ///
    /// # Errors
    ///
    /// Returns [ModelError::DuplicateCoupon] if an existing coupon is the
    /// same coupon under the weak identity. The stash is unchanged on
    /// failure.
    pub fn add_coupon(&mut self, coupon: Coupon) -> Result<(), ModelError> {
        if self.stash.iter().any(|existing| existing.is_same_coupon(&coupon)) {
            return Err(ModelError::DuplicateCoupon);
        }

        self.stash.push(coupon);
        Ok(())
    }

    /// Remove the coupon equal (strong equality) to `coupon` from the stash.
    ///
    /// # Errors
    ///
    /// Returns [ModelError::CouponNotFound] if no such coupon exists.
    pub fn delete_coupon(&mut self, coupon: &Coupon) -> Result<(), ModelError> {
        match self.stash.iter().position(|existing| existing == coupon) {
            Some(index) => {
                self.stash.remove(index);
                Ok(())
            }
            None => Err(ModelError::CouponNotFound),
        }
    }

    /// Replace `target` with `edited`, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns [ModelError::CouponNotFound] if `target` is not in the stash,
    /// or [ModelError::DuplicateCoupon] if `edited` is the same coupon (weak
    /// identity) as a coupon other than `target`. The stash is unchanged on
    /// failure.
    pub fn set_coupon(&mut self, target: &Coupon, edited: Coupon) -> Result<(), ModelError> {
        let Some(index) = self.stash.iter().position(|existing| existing == target) else {
            return Err(ModelError::CouponNotFound);
        };

        let collides = self
            .stash
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.is_same_coupon(&edited));

        if collides {
            return Err(ModelError::DuplicateCoupon);
        }

        self.stash[index] = edited;
        Ok(())
    }

    /// Install a new active predicate for the filtered view.
    pub fn update_filtered_coupon_list(&mut self, predicate: CouponPredicate) {
        self.predicate = predicate;
    }

    /// The coupons matching the active predicate, in backing-collection
    /// order. Recomputed on every call, so the view never goes stale.
    pub fn filtered_coupons(&self) -> Vec<&Coupon> {
        self.stash
            .iter()
            .filter(|coupon| self.predicate.test(coupon))
            .collect()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
