pub mod actants;
pub mod agreement;
pub mod predicate;
