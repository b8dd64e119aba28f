//! Usage page and usage name tables.
//!
//! Names follow the HID Usage Tables (HUT 1.12 page names), covering the
//! pages and usages common in keyboards, mice, game controllers, consumer
//! controls and digitizers.

use alloc::{borrow::Cow, format, string::String};

/// Name of a usage page, if known.
pub fn page_name(page: u32) -> Option<&'static str> {
    Some(match page {
        0x01 => "Generic Desktop Controls",
        0x02 => "Simulation Controls",
        0x03 => "VR Controls",
        0x04 => "Sport Controls",
        0x05 => "Game Controls",
        0x06 => "Generic Device Controls",
        0x07 => "Keyboard/Keypad",
        0x08 => "LEDs",
        0x09 => "Button",
        0x0A => "Ordinal",
        0x0B => "Telephony",
        0x0C => "Consumer",
        0x0D => "Digitizer",
        0x0F => "PID Page",
        0x10 => "Unicode",
        0x14 => "Alphanumeric Display",
        0x20 => "Sensors",
        0x40 => "Medical Instruments",
        0x59 => "Lighting And Illumination",
        0x80 => "Monitor",
        0x81 => "Monitor Enumerated Values",
        0x82 => "VESA Virtual Controls",
        0x84 => "Power Device",
        0x85 => "Battery System",
        0x8C => "Bar Code Scanner",
        0x8D => "Scale",
        0x8E => "Magnetic Stripe Reader",
        0x90 => "Camera Control",
        0x91 => "Arcade",
        0xF1D0 => "FIDO Alliance",
        _ => return None,
    })
}

/// Name of a usage within a page, if known.
pub fn usage_name(page: u32, usage: u32) -> Option<Cow<'static, str>> {
    match page {
        0x01 => generic_desktop(usage).map(Cow::Borrowed),
        0x02 => simulation(usage).map(Cow::Borrowed),
        0x05 => game(usage).map(Cow::Borrowed),
        0x07 => keyboard(usage).map(Cow::Borrowed),
        0x08 => led(usage).map(Cow::Borrowed),
        0x09 => Some(match usage {
            0 => Cow::Borrowed("No Button Pressed"),
            n => Cow::Owned(format!("Button {n}")),
        }),
        0x0A => (usage != 0).then(|| Cow::Owned(format!("Instance {usage}"))),
        0x0C => consumer(usage).map(Cow::Borrowed),
        0x0D => digitizer(usage).map(Cow::Borrowed),
        0xF1D0 => fido(usage).map(Cow::Borrowed),
        _ => None,
    }
}

fn generic_desktop(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "Pointer",
        0x02 => "Mouse",
        0x04 => "Joystick",
        0x05 => "Game Pad",
        0x06 => "Keyboard",
        0x07 => "Keypad",
        0x08 => "Multi-axis Controller",
        0x09 => "Tablet PC System Controls",
        0x30 => "X",
        0x31 => "Y",
        0x32 => "Z",
        0x33 => "Rx",
        0x34 => "Ry",
        0x35 => "Rz",
        0x36 => "Slider",
        0x37 => "Dial",
        0x38 => "Wheel",
        0x39 => "Hat Switch",
        0x3A => "Counted Buffer",
        0x3B => "Byte Count",
        0x3C => "Motion Wakeup",
        0x3D => "Start",
        0x3E => "Select",
        0x40 => "Vx",
        0x41 => "Vy",
        0x42 => "Vz",
        0x43 => "Vbrx",
        0x44 => "Vbry",
        0x45 => "Vbrz",
        0x46 => "Vno",
        0x80 => "System Control",
        0x81 => "System Power Down",
        0x82 => "System Sleep",
        0x83 => "System Wake Up",
        0x90 => "D-pad Up",
        0x91 => "D-pad Down",
        0x92 => "D-pad Right",
        0x93 => "D-pad Left",
        _ => return None,
    })
}

fn simulation(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "Flight Simulation Device",
        0x02 => "Automobile Simulation Device",
        0xB0 => "Aileron",
        0xBA => "Rudder",
        0xBB => "Throttle",
        0xC4 => "Accelerator",
        0xC5 => "Brake",
        0xC6 => "Clutch",
        0xC8 => "Steering",
        _ => return None,
    })
}

fn game(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "3D Game Controller",
        0x02 => "Pinball Device",
        0x03 => "Gun Device",
        0x20 => "Point of View",
        0x37 => "Gamepad Fire/Jump",
        0x39 => "Gamepad Trigger",
        _ => return None,
    })
}

const KEYBOARD_LETTERS: [&str; 26] = [
    "Keyboard A", "Keyboard B", "Keyboard C", "Keyboard D", "Keyboard E", "Keyboard F",
    "Keyboard G", "Keyboard H", "Keyboard I", "Keyboard J", "Keyboard K", "Keyboard L",
    "Keyboard M", "Keyboard N", "Keyboard O", "Keyboard P", "Keyboard Q", "Keyboard R",
    "Keyboard S", "Keyboard T", "Keyboard U", "Keyboard V", "Keyboard W", "Keyboard X",
    "Keyboard Y", "Keyboard Z",
];

const KEYBOARD_DIGITS: [&str; 10] = [
    "Keyboard 1", "Keyboard 2", "Keyboard 3", "Keyboard 4", "Keyboard 5", "Keyboard 6",
    "Keyboard 7", "Keyboard 8", "Keyboard 9", "Keyboard 0",
];

const KEYBOARD_MODIFIERS: [&str; 8] = [
    "Keyboard LeftControl",
    "Keyboard LeftShift",
    "Keyboard LeftAlt",
    "Keyboard Left GUI",
    "Keyboard RightControl",
    "Keyboard RightShift",
    "Keyboard RightAlt",
    "Keyboard Right GUI",
];

fn keyboard(usage: u32) -> Option<&'static str> {
    let index = |base: u32| (usage - base) as usize;

    Some(match usage {
        0x01 => "Keyboard ErrorRollOver",
        0x02 => "Keyboard POSTFail",
        0x03 => "Keyboard ErrorUndefined",
        0x04..=0x1D => KEYBOARD_LETTERS[index(0x04)],
        0x1E..=0x27 => KEYBOARD_DIGITS[index(0x1E)],
        0x28 => "Keyboard Return (ENTER)",
        0x29 => "Keyboard ESCAPE",
        0x2A => "Keyboard DELETE (Backspace)",
        0x2B => "Keyboard Tab",
        0x2C => "Keyboard Spacebar",
        0x39 => "Keyboard Caps Lock",
        0x4F => "Keyboard RightArrow",
        0x50 => "Keyboard LeftArrow",
        0x51 => "Keyboard DownArrow",
        0x52 => "Keyboard UpArrow",
        0x53 => "Keypad Num Lock and Clear",
        0xE0..=0xE7 => KEYBOARD_MODIFIERS[index(0xE0)],
        _ => return None,
    })
}

fn led(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "Num Lock",
        0x02 => "Caps Lock",
        0x03 => "Scroll Lock",
        0x04 => "Compose",
        0x05 => "Kana",
        0x06 => "Power",
        0x07 => "Shift",
        _ => return None,
    })
}

fn consumer(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "Consumer Control",
        0x02 => "Numeric Key Pad",
        0x30 => "Power",
        0x40 => "Menu",
        0x6F => "Display Brightness Increment",
        0x70 => "Display Brightness Decrement",
        0xB0 => "Play",
        0xB1 => "Pause",
        0xB3 => "Fast Forward",
        0xB4 => "Rewind",
        0xB5 => "Scan Next Track",
        0xB6 => "Scan Previous Track",
        0xB7 => "Stop",
        0xCD => "Play/Pause",
        0xE0 => "Volume",
        0xE2 => "Mute",
        0xE9 => "Volume Increment",
        0xEA => "Volume Decrement",
        0x183 => "AL Consumer Control Configuration",
        0x18A => "AL Email Reader",
        0x192 => "AL Calculator",
        0x223 => "AC Home",
        0x224 => "AC Back",
        0x225 => "AC Forward",
        0x238 => "AC Pan",
        _ => return None,
    })
}

fn digitizer(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "Digitizer",
        0x02 => "Pen",
        0x04 => "Touch Screen",
        0x05 => "Touch Pad",
        0x20 => "Stylus",
        0x22 => "Finger",
        0x30 => "Tip Pressure",
        0x32 => "In Range",
        0x33 => "Touch",
        0x3C => "Invert",
        0x42 => "Tip Switch",
        0x44 => "Barrel Switch",
        0x45 => "Eraser",
        0x47 => "Confidence",
        0x48 => "Width",
        0x49 => "Height",
        0x51 => "Contact Identifier",
        0x54 => "Contact Count",
        0x55 => "Contact Count Maximum",
        _ => return None,
    })
}

fn fido(usage: u32) -> Option<&'static str> {
    Some(match usage {
        0x01 => "U2F Authenticator Device",
        0x20 => "Input Report Data",
        0x21 => "Output Report Data",
        _ => return None,
    })
}

/// Explain a usage in the context of its usage page.
///
/// With both names known, renders `"<Page>/<Usage>"` with spaces removed;
/// with only the page known, `"<Page>: 0x<usage>"`; otherwise both codes in
/// hexadecimal.
pub fn explain_usage(page: u32, usage: u32) -> String {
    match (page_name(page), usage_name(page, usage)) {
        (Some(page), Some(usage)) => {
            format!("{}/{}", page.replace(' ', ""), usage.replace(' ', ""))
        }
        (Some(page), None) => format!("{page}: {usage:#04x}"),
        (None, _) => format!("{page:#04x}: {usage:#04x}"),
    }
}

/// Explain a usage page on its own.
pub fn explain_usage_page(page: u32) -> String {
    page_name(page).map_or_else(|| format!("{page:#04x}"), String::from)
}
