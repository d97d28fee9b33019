//! Browser viewport queries. Requires a browser environment; SSR paths
//! return `None` so server rendering stays deterministic.

/// Current `window.innerWidth` in CSS pixels.
pub fn width() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let px = match web_sys::window()?.inner_width() {
            Ok(value) => value.as_f64()?,
            Err(e) => {
                log::warn!("window.innerWidth unavailable: {e:?}");
                return None;
            }
        };
        if px.is_finite() && px >= 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            return Some(px as u32);
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Lock or release page scrolling while an overlay is open.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let overflow = if locked { "hidden" } else { "" };
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("failed to set body overflow to {overflow:?}: {e:?}");
            }
        }
    }
}
