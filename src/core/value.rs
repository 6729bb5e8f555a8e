/// Who owns the authoritative value. Fixed for the life of the control,
/// decided once at construction by whether an explicit value was supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// An external caller owns the value; the store only reflects it.
    Controlled,
    /// The store owns a local value, seeded from the configured default.
    Uncontrolled,
}

/// Holds the control's domain value under the controlled/uncontrolled rules.
///
/// No clamping happens here: on the drag path the value is always
/// `Scale::to_value` of an already-normalized angle.
#[derive(Clone, Copy, Debug)]
pub struct ValueStore {
    ownership: Ownership,
    value: f32,
}

impl ValueStore {
    pub fn new(value: Option<f32>, default_value: f32) -> Self {
        match value {
            Some(v) => Self {
                ownership: Ownership::Controlled,
                value: v,
            },
            None => Self {
                ownership: Ownership::Uncontrolled,
                value: default_value,
            },
        }
    }

    #[inline]
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Current value: the externally-fed one when controlled, else local.
    #[inline]
    pub fn read(&self) -> f32 {
        self.value
    }

    /// Store a value produced by the drag path or the companion input.
    ///
    /// In controlled mode the local copy is left untouched; the external
    /// owner is expected to feed the value back via [`sync_external`].
    /// Always returns the value to forward to the change notification.
    ///
    /// [`sync_external`]: ValueStore::sync_external
    pub fn write(&mut self, value: f32) -> f32 {
        if self.ownership == Ownership::Uncontrolled {
            self.value = value;
        }
        value
    }

    /// Reflect the externally owned value. No-op in uncontrolled mode.
    pub fn sync_external(&mut self, value: f32) {
        if self.ownership == Ownership::Controlled {
            self.value = value;
        }
    }
}
