//! Synthetic keyboard output via uinput.

use std::fmt;
use std::io;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key};
use tracing::info;

use scrollsteer_actuation::KeySink;
use scrollsteer_steering::Side;

/// Virtual keyboard pressing the mapped steering keys.
///
/// The device advertises exactly the two configured keys ('a' and 'd' by
/// default), so nothing else can ever be injected through it.
pub struct UinputKeySink {
    device: VirtualDevice,
    left: Key,
    right: Key,
}

impl UinputKeySink {
    /// Create the uinput device. Requires write access to `/dev/uinput`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the device cannot be created,
    /// typically missing permissions on `/dev/uinput`.
    pub fn create(name: &str, left: Key, right: Key) -> io::Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(left);
        keys.insert(right);

        let device = VirtualDeviceBuilder::new()?
            .name(name)
            .with_keys(&keys)?
            .build()?;

        info!(name, "virtual keyboard created");
        Ok(Self { device, left, right })
    }

    fn mapped(&self, side: Side) -> Key {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn emit(&mut self, side: Side, value: i32) -> io::Result<()> {
        let key = self.mapped(side);
        self.device
            .emit(&[InputEvent::new_now(EventType::KEY, key.code(), value)])
    }
}

impl KeySink for UinputKeySink {
    fn press(&mut self, side: Side) -> io::Result<()> {
        self.emit(side, 1)
    }

    fn release(&mut self, side: Side) -> io::Result<()> {
        self.emit(side, 0)
    }
}

impl fmt::Debug for UinputKeySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UinputKeySink")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}
