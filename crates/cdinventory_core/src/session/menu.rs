//! Menu tokens accepted at the main prompt.

/// One of the six single-letter menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `l`: reload inventory from file.
    Load,
    /// `a`: add a CD.
    Add,
    /// `i`: display current inventory.
    Inventory,
    /// `d`: delete a CD.
    Delete,
    /// `s`: save inventory to file.
    Save,
    /// `x`: exit without saving.
    Exit,
}

pub(crate) const MENU_TEXT: &str = "\nMenu\n\n\
[l] load Inventory from file\n\
[a] Add CD\n\
[i] Display Current Inventory\n\
[d] delete CD from Inventory\n\
[s] Save Inventory to file\n\
[x] exit\n";

pub(crate) const MENU_PROMPT: &str =
    "Which operation would you like to perform? [l, a, i, d, s or x]: ";

impl MenuChoice {
    /// Parses a menu token, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything other than `l|a|i|d|s|x`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Inventory),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Add => "add",
            Self::Inventory => "inventory",
            Self::Delete => "delete",
            Self::Save => "save",
            Self::Exit => "exit",
        }
    }
}
