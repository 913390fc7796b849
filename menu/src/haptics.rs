// vibration patterns, in milliseconds
//
// playing them is best-effort and up to the platform; the core only decides which one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Haptic {
    // generic button press
    Tap,
    // tab click or menu shortcut
    Navigate,
    // strip edge buttons and menu item rows
    Nudge,
    ThemeToggle,
}

impl Haptic {
    pub fn pattern(self) -> &'static [u32] {
        match self {
            Haptic::Tap => &[10],
            Haptic::Navigate => &[15],
            Haptic::Nudge => &[5],
            Haptic::ThemeToggle => &[10, 40, 10],
        }
    }
}
