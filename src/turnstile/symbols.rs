use crate::symbol_enum;

symbol_enum! {
    /// Positions of the two-coin turnstile.
    pub enum TurnstileState: State {
        /// No coins inserted; the initial state
        Locked0,
        /// One coin inserted
        Locked1,
        /// Admission granted, waiting for passage
        Unlocked,
        /// An unpaid passage was detected
        Alarming,
    }
}

symbol_enum! {
    /// Stimuli accepted by the turnstile.
    pub enum TurnstileEvent: Event {
        Coin,
        Pass,
        Reset,
    }
}

symbol_enum! {
    /// Side effects the turnstile table can request.
    pub enum TurnstileAction: Action {
        Unlock = "unlock",
        Lock = "lock",
        AlarmOn = "alarmOn",
        AlarmOff = "alarmOff",
        Thankyou = "thankyou",
    }
}
