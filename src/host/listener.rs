//! DOM event listener that unregisters itself on drop.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::FolioError;

pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Listen for `kind` on `target` with default options.
    ///
    /// Events that are not an `E` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Dom`] if the browser rejects the registration.
    pub fn new<E>(target: &EventTarget, kind: &'static str, handler: impl FnMut(E) + 'static) -> Result<Self, FolioError>
    where
        E: JsCast + 'static,
    {
        let callback = wrap(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Listen with an explicit `passive` flag. Handlers that call
    /// `preventDefault` on wheel or touch events need `passive: false`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Dom`] if the browser rejects the registration.
    pub fn with_passive<E>(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(E) + 'static,
    ) -> Result<Self, FolioError>
    where
        E: JsCast + 'static,
    {
        let callback = wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

fn wrap<E>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
{
    Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>)
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("listener: failed to remove {} handler: {err:?}", self.kind);
        }
    }
}
