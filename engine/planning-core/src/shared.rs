//! Shared handles for planner collaborators.
//!
//! Value estimators and model selectors outlive any single planner and may
//! be held by several at once (e.g. agents planning with one learned model).
//! Planning is single-threaded, so `Rc<RefCell<_>>` is enough; a parallel
//! planner has to partition or synchronize its statistics itself.

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted, interior-mutable collaborator handle.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a collaborator so it can be handed to one or more planners.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
