//! Access Policy - the single source of truth for feature gating
//!
//! Every feature maps to exactly one access requirement, and the tier
//! containment rule (pro covers everything premium does, but premium never
//! covers pro-only features) is expressed once through the tier ordering
//! rather than re-derived at call sites.
//!
//! `can_access` is pure and total: it never fails, it answers. A `false` is
//! the normal signal for a locked feature, not an error condition.

mod policy;

pub use policy::{can_access, AccessRequirement, Feature, Tier, UnknownFeature};
