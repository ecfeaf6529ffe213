use super::symbols::{TurnstileAction, TurnstileEvent, TurnstileState};
use crate::machine::ActionSink;

/// Side effects of the two-coin turnstile.
///
/// Integrators implement this to wire the turnstile to hardware, a log,
/// or a test double. Every method is invoked synchronously from within
/// [`Turnstile::process`](super::Turnstile::process).
pub trait TurnstileActions {
    fn unlock(&mut self);
    fn lock(&mut self);
    fn alarm_on(&mut self);
    fn alarm_off(&mut self);
    fn thankyou(&mut self);

    /// Called when the current state has no entry for the event.
    fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent);
}

impl<T: TurnstileActions + ?Sized> TurnstileActions for &mut T {
    fn unlock(&mut self) {
        (**self).unlock();
    }

    fn lock(&mut self) {
        (**self).lock();
    }

    fn alarm_on(&mut self) {
        (**self).alarm_on();
    }

    fn alarm_off(&mut self) {
        (**self).alarm_off();
    }

    fn thankyou(&mut self) {
        (**self).thankyou();
    }

    fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
        (**self).unhandled_transition(state, event);
    }
}

/// Adapts a [`TurnstileActions`] implementor to the generic sink interface.
pub(crate) struct ActionRouter<K>(pub(crate) K);

impl<K: TurnstileActions> ActionSink<TurnstileState, TurnstileEvent, TurnstileAction>
    for ActionRouter<K>
{
    fn perform(&mut self, action: TurnstileAction) {
        match action {
            TurnstileAction::Unlock => self.0.unlock(),
            TurnstileAction::Lock => self.0.lock(),
            TurnstileAction::AlarmOn => self.0.alarm_on(),
            TurnstileAction::AlarmOff => self.0.alarm_off(),
            TurnstileAction::Thankyou => self.0.thankyou(),
        }
    }

    fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
        self.0.unhandled_transition(state, event);
    }
}
