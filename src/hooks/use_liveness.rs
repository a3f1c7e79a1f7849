use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Tracks whether the calling component is still mounted.
///
/// Async work spawned from an event handler must check the flag before
/// touching state, so a late response never lands on an unmounted form.
#[hook]
pub fn use_liveness() -> Rc<Cell<bool>> {
    let alive = use_memo((), |_| Cell::new(true));

    {
        let alive = alive.clone();
        use_effect_with((), move |_| move || alive.set(false));
    }

    alive
}
